//! Tests for the root facade re-exports

use voxview::foundation::{Record, Value};
use voxview::render::{render, RenderOptions};
use voxview::synth::SyntheticDataset;

#[test]
fn all_layers_reachable_through_the_facade() {
    let r = Record::new().with("x", 1i64);
    let out = render(&Value::from(r)).unwrap();
    assert_eq!(out, ".x\n  [ 1 ]");
}

#[test]
fn synth_layer_through_the_facade() {
    let ds = SyntheticDataset::new().with_seed(1).build().unwrap();
    assert!(render(&Value::from(ds)).is_ok());
}

#[test]
fn options_through_the_facade() {
    let opts = RenderOptions::full();
    assert_eq!(opts.threshold, usize::MAX);
}
