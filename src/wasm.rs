//! JavaScript bindings.
//!
//! Entities cross the boundary as plain objects `{ id, rank, ... }`; extra
//! fields are ignored. Tier results refer back to entities by position or
//! id so callers keep their own objects.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::aggregate::{aggregate_assignments, Palette};
use crate::error::TierError;
use crate::tiering::{Ranked, TierConfig, TierEngine};

#[derive(Deserialize)]
struct JsEntity {
    id: String,
    rank: f64,
}

impl Ranked for JsEntity {
    fn id(&self) -> &str {
        &self.id
    }

    fn rank(&self) -> f64 {
        self.rank
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTierAggregate {
    tier_number: usize,
    member_ids: Vec<String>,
    min_rank: f64,
    max_rank: f64,
    avg_rank: f64,
    color: String,
}

fn from_js<T: for<'de> Deserialize<'de>>(value: JsValue) -> Result<T, TierError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| TierError::Conversion(e.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, TierError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| TierError::Conversion(e.to_string()))
}

fn engine_from_js(config: JsValue) -> Result<TierEngine, TierError> {
    let config: TierConfig = if config.is_undefined() || config.is_null() {
        TierConfig::default()
    } else {
        from_js(config)?
    };
    TierEngine::new(config)
}

fn js_error(e: TierError) -> JsError {
    JsError::new(&e.to_string())
}

/// Returns the tier number of every entity, in input order.
///
/// `config` may be `undefined` for the defaults.
#[wasm_bindgen(js_name = assignTiers)]
pub fn assign_tiers_js(entities: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let run = || -> Result<JsValue, TierError> {
        let engine = engine_from_js(config)?;
        let entities: Vec<JsEntity> = from_js(entities)?;
        to_js(&engine.tier_numbers(&entities)?)
    };
    run().map_err(js_error)
}

/// Returns per-tier aggregates, ascending by tier number.
#[wasm_bindgen(js_name = buildTierAggregates)]
pub fn build_tier_aggregates_js(entities: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let run = || -> Result<JsValue, TierError> {
        let engine = engine_from_js(config)?;
        let entities: Vec<JsEntity> = from_js(entities)?;
        let assignments = engine.assign_tiers(&entities)?;
        let aggregates: Vec<JsTierAggregate> =
            aggregate_assignments(&assignments, &Palette::default())?
                .into_iter()
                .map(|a| JsTierAggregate {
                    tier_number: a.tier_number,
                    member_ids: a.members.iter().map(|m| m.id.clone()).collect(),
                    min_rank: a.min_rank,
                    max_rank: a.max_rank,
                    avg_rank: a.avg_rank,
                    color: a.color,
                })
                .collect();
        to_js(&aggregates)
    };
    run().map_err(js_error)
}
