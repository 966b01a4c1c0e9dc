use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tezaur", about = "Builds a Ukrainian thesaurus from a POS tag dictionary and a trained word-embedding model")]
pub struct Cli {
    /// Enables verbose mode
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Builds the thesaurus using a trained embedding model and a POS tag dictionary
    Build(BuildArgs),
    /// Evaluates an embedding model against a questions file
    Evaluate(EvaluateArgs),
    /// Converts a raw dict_uk export into the compact dictionary format
    Prepare(PrepareArgs),
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Dictionary file
    pub dictionary: PathBuf,

    /// Model file in word2vec/GloVe text format
    pub model: PathBuf,

    /// Destination file to store the thesaurus
    #[arg(short = 'd', long = "destination")]
    pub destination: Option<PathBuf>,

    /// Chunk size to be used
    #[arg(short = 'c', long = "chunk-size")]
    pub chunk_size: Option<usize>,

    /// Top N related words to be used
    #[arg(short = 't', long = "top")]
    pub top: Option<usize>,
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Model file or a directory of model files
    pub model: PathBuf,

    /// Questions file
    pub questions: PathBuf,

    /// Top N neighbors considered per question
    #[arg(short = 't', long = "top")]
    pub top: Option<usize>,
}

#[derive(Debug, Args)]
pub struct PrepareArgs {
    /// Raw dict_uk export file
    pub input: PathBuf,

    /// Destination file for the converted dictionary
    #[arg(short = 'd', long = "destination")]
    pub destination: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_accepts_short_options() {
        let cli = Cli::parse_from([
            "tezaur", "build", "dict.txt", "model.vec", "-d", "out.txt", "-c", "500", "-t",
            "5", "-v",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.destination, Some(PathBuf::from("out.txt")));
                assert_eq!(args.chunk_size, Some(500));
                assert_eq!(args.top, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
