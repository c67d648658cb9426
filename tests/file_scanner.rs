use modgraph::core::{ModgraphError, ScanConfig};
use std::fs;
use std::path::Path;

fn scan(config: &ScanConfig, source: &str) -> modgraph::core::Node {
    config
        .compile()
        .unwrap()
        .scan_reader(source.as_bytes(), Path::new("Test.elm"))
        .unwrap()
}

#[test]
fn collects_module_id_and_dependencies() {
    let source = "\
module Page.Home exposing (view)

import Html exposing (Html)
import Page.Layout exposing (frame)
import Html exposing (text)
";
    let node = scan(&ScanConfig::default(), source);

    assert_eq!(node.id, "Page.Home");
    let deps: Vec<_> = node.dependencies.iter().map(String::as_str).collect();
    assert_eq!(deps, vec!["Html", "Page.Layout"]);
}

#[test]
fn last_module_declaration_wins() {
    let source = "module First exposing (..)\nmodule Second exposing (..)\n";
    let node = scan(&ScanConfig::default(), source);
    assert_eq!(node.id, "Second");
}

#[test]
fn missing_module_declaration_yields_empty_id() {
    let node = scan(&ScanConfig::default(), "import Dict exposing (Dict)\n");
    assert_eq!(node.id, "");
    assert!(node.dependencies.contains("Dict"));
}

#[test]
fn declarations_split_across_lines_are_not_recognized() {
    let node = scan(&ScanConfig::default(), "import\n    Dict exposing (Dict)\n");
    assert!(node.dependencies.is_empty());
}

#[test]
fn ignored_dependencies_never_reach_the_graph() {
    let config = ScanConfig::default()
        .with_ignore_pattern("^test\\.")
        .with_replacements("Renamed!!!Helpers");
    let source = "\
module Suite exposing (..)
import test.Helpers exposing (..)
import Main.Helpers exposing (..)
";
    let node = scan(&config, source);

    assert!(!node.dependencies.contains("test.Helpers"));
    assert!(!node.dependencies.contains("Main.Helpers"));
    // only the non-ignored candidate went through the replacement
    assert_eq!(node.dependencies.len(), 1);
    assert!(node.dependencies.contains("Renamed"));
}

#[test]
fn ignore_pattern_sees_the_raw_name() {
    let config = ScanConfig::default()
        .with_ignore_pattern("^Vendor$")
        .with_max_depth(1);
    // truncation maps Vendor.Public to Vendor, which must not be filtered
    let source = "import Vendor exposing (..)\nimport Vendor.Public exposing (..)\n";
    let node = scan(&config, source);

    let deps: Vec<_> = node.dependencies.iter().map(String::as_str).collect();
    assert_eq!(deps, vec!["Vendor"]);
}

#[test]
fn module_id_is_canonicalized() {
    let config = ScanConfig::default().with_max_depth(2);
    let node = scan(&config, "module App.Page.Home.View exposing (..)\n");
    assert_eq!(node.id, "App.Page");
}

#[test]
fn custom_patterns_drive_extraction() {
    let config = ScanConfig::default()
        .with_module_id_pattern(r"^package ([\w.]+);")
        .with_dependency_pattern(r"^import ([\w.]+);");
    let source = "package com.acme.app;\r\nimport java.util.List;\r\nimport com.acme.core.Service;\r\n";
    let node = scan(&config, source);

    assert_eq!(node.id, "com.acme.app");
    assert!(node.dependencies.contains("java.util.List"));
    assert!(node.dependencies.contains("com.acme.core.Service"));
}

#[test]
fn invalid_utf8_lines_are_still_scanned() {
    let scanner = ScanConfig::default().compile().unwrap();
    let mut source = b"module Latin exposing (..)\n-- caf".to_vec();
    source.extend_from_slice(&[0xE9, b'\n']);
    source.extend_from_slice(b"import Bytes exposing (..)\n");

    let node = scanner
        .scan_reader(source.as_slice(), Path::new("Latin.elm"))
        .unwrap();
    assert_eq!(node.id, "Latin");
    assert!(node.dependencies.contains("Bytes"));
}

#[test]
fn scans_files_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("Main.elm");
    fs::write(&path, "module Main exposing (main)\nimport Browser exposing (..)\n").unwrap();

    let node = ScanConfig::default().compile().unwrap().scan(&path).unwrap();
    assert_eq!(node.id, "Main");
    assert!(node.dependencies.contains("Browser"));
}

#[test]
fn unreadable_file_is_an_open_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("Missing.elm");

    let err = ScanConfig::default()
        .compile()
        .unwrap()
        .scan(&missing)
        .unwrap_err();
    match err {
        ModgraphError::Open { path, .. } => assert_eq!(path, missing),
        other => panic!("expected open error, got {other:?}"),
    }
}
