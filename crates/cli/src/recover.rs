// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::Path;

use anyhow::{Context, Result};
use num_bigint::BigInt;
use num_rational::BigRational;
use serde_json::json;
use sf_polynomial::{FirstK, Polynomial, Reconstructor, SelectionStrategy, SortedByX};
use tracing::{debug, info};

use crate::config::{AppConfig, OutputFormat, Strategy};
use crate::document::{load_document, ShareDocument};

#[derive(Debug, Clone, PartialEq)]
pub struct Recovered {
    pub n: usize,
    pub k: usize,
    pub secret: BigInt,
    /// Every coefficient, highest degree first. Only set when asked for.
    pub coefficients: Option<Vec<BigRational>>,
}

/// Writes integer coefficients as a polynomial and anything else as a plain list.
fn describe_coefficients(coefficients: &[BigRational]) -> String {
    if coefficients.iter().all(BigRational::is_integer) {
        let polynomial =
            Polynomial::new(coefficients.iter().map(BigRational::to_integer).collect());
        format!("Polynomial f(x) = {polynomial}")
    } else {
        let listed: Vec<String> = coefficients.iter().map(ToString::to_string).collect();
        format!(
            "Polynomial coefficients (highest degree first) = {}",
            listed.join(", ")
        )
    }
}

fn selection(strategy: Strategy) -> Box<dyn SelectionStrategy> {
    match strategy {
        Strategy::FirstK => Box::new(FirstK),
        Strategy::SortedByX => Box::new(SortedByX),
    }
}

pub fn recover(document: &ShareDocument, config: &AppConfig) -> Result<Recovered> {
    debug!(strategy = ?config.strategy(), "Using share selection strategy");
    let reconstructor = Reconstructor::with_strategy(selection(config.strategy()));

    let secret = reconstructor
        .reconstruct(&document.points, document.k)
        .context("Could not reconstruct the secret")?;

    let coefficients = if config.print_polynomial() {
        Some(
            reconstructor
                .reconstruct_coefficients(&document.points, document.k)
                .context("Could not reconstruct the polynomial")?,
        )
    } else {
        None
    };

    Ok(Recovered {
        n: document.n,
        k: document.k,
        secret,
        coefficients,
    })
}

pub fn render(recovered: &Recovered, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = format!("Secret constant c = {}", recovered.secret);
            if let Some(coefficients) = &recovered.coefficients {
                out.push('\n');
                out.push_str(&describe_coefficients(coefficients));
            }
            out
        }
        OutputFormat::Json => {
            let mut out = json!({
                "secret": recovered.secret.to_string(),
                "k": recovered.k,
                "n": recovered.n,
            });
            if let Some(coefficients) = &recovered.coefficients {
                out["coefficients"] = coefficients
                    .iter()
                    .map(|c| json!(c.to_string()))
                    .collect();
            }
            out.to_string()
        }
    }
}

pub fn execute(file: &Path, config: &AppConfig) -> Result<()> {
    let document = load_document(file)?;
    info!(
        n = document.n,
        k = document.k,
        shares = document.points.len(),
        "Loaded share document"
    );

    let recovered = recover(&document, config)?;
    println!("{}", render(&recovered, config.format()));
    Ok(())
}
