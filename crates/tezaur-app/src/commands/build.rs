use std::sync::Arc;

use anyhow::Context;
use tezaur_dict::Dictionary;
use tezaur_embedding::{EmbeddingModel, WordVectors};
use tokio::task;

use crate::cli::BuildArgs;
use crate::config::Config;
use crate::output;

pub async fn run(args: BuildArgs, config: &Config) -> anyhow::Result<()> {
    let chunk_size = args.chunk_size.unwrap_or(config.chunk_size);
    let top = args.top.unwrap_or(config.top);
    let destination = args
        .destination
        .unwrap_or_else(|| output::default_destination("thesaurus"));

    // The two loads have no data dependency; run them concurrently and
    // join both before the build starts.
    let dictionary = task::spawn_blocking({
        let path = args.dictionary.clone();
        move || Dictionary::load(path)
    });
    let model = task::spawn_blocking({
        let path = args.model.clone();
        move || WordVectors::load(path)
    });

    let (dictionary, model) = tokio::join!(dictionary, model);
    let dictionary = Arc::new(dictionary.context("dictionary load task failed")??);
    let model = Arc::new(model.context("model load task failed")??);

    tracing::info!(
        "Loaded {} POS definitions, {} embedding words",
        dictionary.len(),
        model.len()
    );

    let vocabulary = model.vocabulary().to_vec();
    let thesaurus =
        tezaur_builder::build(dictionary, model, vocabulary, chunk_size, top).await?;

    tracing::info!("Storing {} definitions into file", thesaurus.entries.len());
    output::store(&thesaurus, &destination)
        .with_context(|| format!("failed to store thesaurus to {}", destination.display()))?;

    tracing::info!(
        "Thesaurus was successfully built and stored to file {}",
        destination.display()
    );

    Ok(())
}
