//! End-to-end rendering of synthetic datasets

use voxview_foundation::Value;
use voxview_render::{render, render_with, RenderOptions};
use voxview_synth::SyntheticDataset;

#[test]
fn dataset_fields_appear_in_declaration_order() {
    let ds = SyntheticDataset::new().build().unwrap();
    let out = render(&Value::from(ds)).unwrap();
    let samples = out.find(".samples\n").unwrap();
    let sa = out.find("\n.sa\n").unwrap();
    let fa = out.find("\n.fa\n").unwrap();
    let a = out.find("\n.a\n").unwrap();
    assert!(samples < sa && sa < fa && fa < a);
}

#[test]
fn small_dataset_shows_every_sample() {
    let ds = SyntheticDataset::new().build().unwrap();
    let out = render(&Value::from(ds)).unwrap();
    // 6 samples and threshold 5 with edgeitems 3: limit is 6, not exceeded
    assert!(!out.contains("..."));
    assert!(!out.contains("@6x6"));
}

#[test]
fn large_dataset_summarizes_the_sample_matrix() {
    let ds = SyntheticDataset::new()
        .with_chunks(10)
        .with_features(30)
        .build()
        .unwrap();
    let out = render(&Value::from(ds)).unwrap();
    assert!(out.contains(" ... "));
    assert!(out.contains("@20x30"));
}

#[test]
fn rendering_a_dataset_is_deterministic() {
    let make = || {
        let ds = SyntheticDataset::new().with_seed(7).build().unwrap();
        render(&Value::from(ds)).unwrap()
    };
    assert_eq!(make(), make());
}

#[test]
fn nested_attribute_records_are_indented() {
    let ds = SyntheticDataset::new().build().unwrap();
    let out = render(&Value::from(ds)).unwrap();
    assert!(out.contains("\n  .targets"));
    assert!(out.contains("\n  .chunks"));
    assert!(out.contains("\n  .fdim"));
}

#[test]
fn dimension_labels_render_as_a_sequence() {
    let ds = SyntheticDataset::new().build().unwrap();
    let out = render(&Value::from(ds)).unwrap();
    assert!(out.contains("{ 'targets'  'chunks' }"));
}

#[test]
fn shallow_depth_collapses_attribute_records() {
    let ds = SyntheticDataset::new().build().unwrap();
    let out = render_with(
        &Value::from(ds),
        &RenderOptions::new().with_max_depth(1),
    )
    .unwrap();
    assert!(out.contains(".samples"));
    assert!(out.contains(".sa\n  <record@1x1>"));
    assert!(out.contains(".fa\n  <record@1x1>"));
}

#[test]
fn full_options_expand_everything() {
    let ds = SyntheticDataset::new().with_chunks(10).build().unwrap();
    let out = render_with(&Value::from(ds), &RenderOptions::full()).unwrap();
    assert!(!out.contains("..."));
    assert!(!out.contains('@'));
}

#[test]
fn class_values_are_grouped_per_dimension() {
    let ds = SyntheticDataset::new().with_targets(3).build().unwrap();
    let out = render(&Value::from(ds)).unwrap();
    assert!(out.contains("'class1'"));
    assert!(out.contains("'class3'"));
}
