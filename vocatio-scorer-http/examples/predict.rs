//! Answer the sample quiz and submit it to a local recommendation service.
//!
//! Start the service on `localhost:8000`, then:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example predict
//! ```

use vocatio::{JudgmentStage, Session};
use vocatio_scorer_http::HttpScorer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let mut session = Session::new(example_quizzes::aptitude::bank().sequence());
    while !session.is_complete() {
        match session.stage() {
            JudgmentStage::Best => session.record("2"),
            JudgmentStage::Second => session.record("3"),
            JudgmentStage::None => session.record("1"),
        };
    }

    let endpoint = reqwest::Url::parse("http://localhost:8000/api/predict")?;
    let scorer = HttpScorer::new(endpoint).top_k(5);
    let report = session.submit(&scorer).await?;

    println!("strongest traits:");
    for (name, value) in report.top_traits(3) {
        println!("  {name}: {:.1}%", value * 100.0);
    }

    println!("recommended roles:");
    for ranked in report.resolve(&example_quizzes::careers::careers()) {
        println!(
            "  {} ({:.1}%) - {}",
            ranked.career.name_en,
            ranked.score * 100.0,
            ranked.career.overview
        );
    }

    Ok(())
}
