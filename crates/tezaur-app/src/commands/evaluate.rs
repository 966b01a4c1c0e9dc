use std::path::Path;

use anyhow::Context;
use tezaur_builder::{Question, evaluate, load_questions};
use tezaur_embedding::WordVectors;
use tokio::task;

use crate::cli::EvaluateArgs;
use crate::config::Config;

pub async fn run(args: EvaluateArgs, config: &Config) -> anyhow::Result<()> {
    let top = args.top.unwrap_or(config.top);
    let questions = load_questions(&args.questions).with_context(|| {
        format!("failed to read questions from {}", args.questions.display())
    })?;

    // A directory scores every model file it contains, as the original
    // evaluator did.
    if args.model.is_dir() {
        let mut models: Vec<_> = std::fs::read_dir(&args.model)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        models.sort();

        for path in models {
            score_model(&path, &questions, top).await?;
        }
    } else {
        score_model(&args.model, &questions, top).await?;
    }

    Ok(())
}

async fn score_model(path: &Path, questions: &[Question], top: usize) -> anyhow::Result<()> {
    let model = task::spawn_blocking({
        let path = path.to_path_buf();
        move || WordVectors::load(path)
    })
    .await
    .context("model load task failed")??;

    let evaluation = evaluate(&model, questions, top)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!("Model {name} score is {}%", evaluation.score_percent());

    Ok(())
}
