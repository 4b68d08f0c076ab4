extern crate clap;
extern crate rayon;
extern crate serde;
extern crate serde_json;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use clap::{App, Arg};
use rayon::prelude::*;
use serde::Serialize;

use anadex::*;

#[derive(Serialize)]
struct QueryMatch<'a> {
    input: String,
    anagrams: Vec<&'a str>,
}

fn read_queries(inputstream: impl Read) -> Vec<String> {
    let mut queries = Vec::new();
    let f_buffer = BufReader::new(inputstream);
    for line in f_buffer.lines() {
        if let Ok(line) = line {
            if !line.is_empty() {
                queries.push(line);
            }
        }
    }
    queries
}

///Resolve a batch of queries against the model. The model is only read, so
///resolution fans out over the rayon thread pool unless single-threaded
///operation was requested; the output order is the input order either way.
fn resolve_queries<'a>(
    model: &'a AnagramModel,
    queries: Vec<String>,
    single_thread: bool,
) -> Vec<QueryMatch<'a>> {
    if single_thread {
        queries
            .into_iter()
            .map(|input| {
                let anagrams = model.get_anagrams(&input);
                QueryMatch { input, anagrams }
            })
            .collect()
    } else {
        queries
            .into_par_iter()
            .map(|input| {
                let anagrams = model.get_anagrams(&input);
                QueryMatch { input, anagrams }
            })
            .collect()
    }
}

fn output_matches_as_tsv(matches: &[QueryMatch]) {
    for querymatch in matches {
        print!("{}", querymatch.input);
        for anagram in querymatch.anagrams.iter() {
            print!("\t{}", anagram);
        }
        println!();
    }
}

fn output_matches_as_json(matches: &[QueryMatch]) {
    println!(
        "{}",
        serde_json::to_string_pretty(matches).expect("serialising query matches")
    );
}

fn process(model: &AnagramModel, inputstream: impl Read, json: bool, single_thread: bool) {
    let queries = read_queries(inputstream);
    let matches = resolve_queries(model, queries, single_thread);
    if json {
        output_matches_as_json(&matches);
    } else {
        output_matches_as_tsv(&matches);
    }
}

fn main() {
    let args = App::new("Anadex")
        .version("0.1")
        .about("Anagram dictionary lookup")
        .arg(Arg::with_name("lexicon")
            .long("lexicon")
            .short("l")
            .help("Lexicon to index. The lexicon should contain one word per line; further tab-separated columns (e.g. frequency information) are ignored. This option may be used multiple times for multiple lexicons.")
            .takes_value(true)
            .number_of_values(1)
            .multiple(true)
            .required(true))
        .arg(Arg::with_name("json")
            .long("json")
            .short("j")
            .help("Output json instead of tsv")
            .required(false))
        .arg(Arg::with_name("single-thread")
            .long("single-thread")
            .help("Resolve queries on a single thread instead of leveraging multiple cores (lowers resource use)")
            .required(false))
        .arg(Arg::with_name("debug")
            .long("debug")
            .short("D")
            .help("Verbose debug output to stderr")
            .required(false))
        .arg(Arg::with_name("files")
            .help("Input files with one query word per line (defaults to stdin)")
            .takes_value(true)
            .multiple(true)
            .required(false))
        .get_matches();

    eprintln!("Loading lexicons...");
    let mut model = AnagramModel::new(args.is_present("debug"));
    for filename in args.values_of("lexicon").unwrap() {
        model
            .read_lexicon(filename)
            .expect(format!("ERROR: Unable to read lexicon {}", filename).as_str());
    }

    eprintln!("Building anagram index...");
    model.build();
    eprintln!(
        " - Indexed {} words under {} anagram keys",
        model.decoder.len(),
        model.index.len()
    );

    let json = args.is_present("json");
    let single_thread = args.is_present("single-thread");

    if let Some(files) = args.values_of("files") {
        for filename in files {
            let f = File::open(filename)
                .expect(format!("ERROR: Unable to open file {}", filename).as_str());
            process(&model, f, json, single_thread);
        }
    } else {
        process(&model, io::stdin(), json, single_thread);
    }
}
