use super::{dashboard, ui};
use crate::core::prediction::{AssetPrediction, AssetType, PredictionProvider};
use anyhow::Result;
use futures::future::join_all;

pub async fn run(
    symbols: &[String],
    asset_type: AssetType,
    provider: &(dyn PredictionProvider + Send + Sync),
) -> Result<()> {
    // Step 1: Fetch all predictions concurrently
    let pb = ui::new_progress_bar(symbols.len() as u64, true);
    pb.set_message("Running predictions...");

    let prediction_futures = symbols.iter().map(|symbol| {
        let pb_clone = pb.clone();
        async move {
            let res = provider.run_prediction(symbol, asset_type).await;
            pb_clone.inc(1);
            (symbol.clone(), res)
        }
    });
    let results: Vec<(String, Result<AssetPrediction>)> = join_all(prediction_futures).await;
    pb.finish_and_clear();

    // Step 2: Render a dashboard per symbol; failures become error lines
    // instead of aborting the remaining symbols
    let num_symbols = results.len();
    for (i, (symbol, result)) in results.iter().enumerate() {
        match result {
            Ok(prediction) => println!("{}", dashboard::render(prediction)?),
            Err(e) => println!(
                "{}",
                ui::style_text(&format!("{symbol}: {e}"), ui::StyleType::Error)
            ),
        }

        if i < num_symbols - 1 {
            ui::print_separator();
        }
    }

    Ok(())
}
