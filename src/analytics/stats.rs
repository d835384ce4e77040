//! Guarded arithmetic shared by the reductions.
//!
//! Every division goes through [`ratio`], so an empty input produces `None`
//! instead of NaN or infinity.

use crate::domain::AnnotatedProperty;
use std::collections::HashMap;

pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    Some(numerator / denominator)
}

/// Share of `part` in `whole` as a percentage.
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    ratio(part as f64 * 100.0, whole as f64)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn mean(values: &[f64]) -> Option<f64> {
    ratio(values.iter().sum(), values.len() as f64)
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance = ratio(
        values.iter().map(|v| (v - mean).powi(2)).sum(),
        values.len() as f64,
    )?;
    Some(variance.sqrt())
}

/// Element at index `n / 2` of the sorted values: the upper median for even
/// lengths, never an interpolation.
pub fn upper_median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.get(sorted.len() / 2).copied()
}

/// Groups properties by key, keeping groups in order of first appearance.
pub fn group_in_order<'a, F>(
    properties: &'a [AnnotatedProperty],
    key: F,
) -> Vec<(String, Vec<&'a AnnotatedProperty>)>
where
    F: Fn(&AnnotatedProperty) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&AnnotatedProperty>)> = Vec::new();

    for property in properties {
        let k = key(property);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(property),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![property]));
            }
        }
    }

    groups
}

/// Number of distinct keys.
pub fn distinct<'a, I>(keys: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = keys.into_iter().collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}
