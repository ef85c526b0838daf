use std::path::PathBuf;

use anyhow::{Context, Error};
use log::info;
use structopt::StructOpt;

use bert_tokenizer::{Builder, Tokenize};

/// Tokenizes a sequence with a Bert vocabulary.
#[derive(StructOpt, Debug)]
struct Args {
    /// The vocabulary file, defaults to the test vocabulary of the workspace.
    #[structopt(short, long)]
    vocab: Option<PathBuf>,

    /// Keeps the casing and the accents of the words.
    #[structopt(long)]
    cased: bool,

    /// Encloses the tokens by the class and separation tokens.
    #[structopt(long)]
    special_tokens: bool,

    /// The sequence to tokenize.
    #[structopt(default_value = "所有的数据在存储和运算时都要使用二进制数表示")]
    sequence: String,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let Args {
        vocab,
        cased,
        special_tokens,
        sequence,
    } = Args::from_args();

    let vocab = vocab.map_or_else(test_utils::bert::vocab, Ok)?;
    info!("Loading the vocabulary from {}", vocab.display());
    let tokenizer = Builder::<u32>::from_file(&vocab)
        .context("Loading the vocabulary failed.")?
        .with_lowercase(!cased)
        .build();

    let mut tokens = tokenizer.tokenize(&sequence);
    if special_tokens {
        tokens = tokenizer.add_special_tokens(tokens);
    }
    let ids = tokenizer
        .convert_tokens_to_ids(&tokens)
        .context("Converting the tokens failed.")?;
    let masks = tokenizer.convert_tokens_to_masks(&ids);

    println!("tokens: {:?}", tokens);
    println!("ids:    {:?}", ids);
    println!("masks:  {:?}", masks);
    println!("string: {}", tokenizer.convert_tokens_to_string(&tokens));

    Ok(())
}
