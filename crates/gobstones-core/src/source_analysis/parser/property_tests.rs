// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the Gobstones parser.
//!
//! These tests use `proptest` to verify parser invariants:
//!
//! 1. **Parser never panics** — arbitrary input parses or errors
//! 2. **Parser is deterministic** — same input, same AST or same error
//! 3. **Valid programs parse cleanly** — a known-good corpus never errors
//! 4. **Structural equality** — reflexive, and stable under position shifts
//! 5. **Span ordering** — every definition's start precedes its end

use proptest::prelude::*;

use super::parse;

// ============================================================================
// Generators
// ============================================================================

/// Known-valid programs that must parse without errors.
const VALID_PROGRAMS: &[&str] = &[
    "program { }",
    "program { Poner(Rojo) }",
    "program { x := 1; y := x + 2 }",
    "program { let (a, b) := par() }",
    "program { if (puedeMover(Norte)) then { Mover(Norte) } else { } }",
    "program { repeat (10) { Poner(Azul) } }",
    "program { while (hayBolitas(Verde)) { Sacar(Verde) } }",
    "program { foreach dir in [Norte, Sur] { Mover(dir) } }",
    "program { switch (dir) to { Norte -> { } _ -> { } } }",
    "program { match (p) { (a, b) -> { } () -> { } } }",
    "program { c := Coord(x <- 1, y <- 2) }",
    "program { c := Coord(c0 | x <- 10) }",
    "program { xs := [1, 3 .. 99] ++ [0] }",
    "program { ok := not a && b || c == d }",
    "program { n := -x ^ 2 + y * z div w mod v }",
    "procedure Dibujar(x, y) { Poner(x); Mover(y) }",
    "function distancia(a, b) { return (a - b) }",
    "function par() { return (1, 2) }",
    "program { return () }",
    "-- leading comment\nprogram { } # trailing comment",
    "/*@BEGIN_REGION@gen@*/program { }/*@END_REGION@*/",
];

fn valid_program() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_PROGRAMS).prop_map(std::string::ToString::to_string)
}

/// Whitespace paddings used to shift positions without changing structure.
fn padding() -> impl Strategy<Value = String> {
    prop::sample::select(&["", " ", "\n", "\n\n  ", "\t", " \n "][..])
        .prop_map(std::string::ToString::to_string)
}

// ============================================================================
// Property tests
// ============================================================================

/// Default is 512 cases; override via `PROPTEST_CASES` env var for nightly runs.
fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property 1: the parser never panics on arbitrary input.
    #[test]
    fn parser_never_panics(input in "\\PC{0,300}") {
        let _result = parse(&input);
    }

    /// Property 2: parsing is deterministic.
    #[test]
    fn parser_deterministic(input in "\\PC{0,200}") {
        let first = parse(&input);
        let second = parse(&input);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "nondeterministic outcome: {a:?} vs {b:?}"),
        }
    }

    /// Property 3: the valid corpus parses without errors.
    #[test]
    fn valid_programs_parse(input in valid_program()) {
        let definitions = parse(&input);
        prop_assert!(definitions.is_ok(), "program {:?} failed: {:?}", input, definitions);
        prop_assert!(!definitions.unwrap().is_empty());
    }

    /// Property 4a: structural equality is reflexive over parsed programs.
    #[test]
    fn structural_equality_reflexive(input in valid_program()) {
        let definitions = parse(&input).expect("corpus should parse");
        for definition in &definitions {
            prop_assert!(definition.syntactically_equal(definition));
        }
    }

    /// Property 4b: leading whitespace shifts positions but not structure.
    #[test]
    fn structural_equality_survives_shifts(input in valid_program(), pad in padding()) {
        let original = parse(&input).expect("corpus should parse");
        let shifted = parse(&format!("{pad}{input}")).expect("shifted corpus should parse");
        prop_assert_eq!(original.len(), shifted.len());
        for (a, b) in original.iter().zip(&shifted) {
            prop_assert!(a.syntactically_equal(b), "shift broke structure of {:?}", input);
        }
    }

    /// Property 5: every definition's span is ordered.
    #[test]
    fn definition_spans_ordered(input in valid_program()) {
        let definitions = parse(&input).expect("corpus should parse");
        for definition in &definitions {
            let span = definition.span();
            prop_assert!(span.start().precedes_or_equals(span.end()));
        }
    }
}
