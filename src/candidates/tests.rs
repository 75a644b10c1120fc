use super::generate_candidates;
use super::generator::{MODIFIER_PATTERNS, strip_modifiers, tokenize};
use super::terms::MODIFIER_TERMS;

#[test]
fn test_empty_and_blank_input_yield_nothing() {
    assert!(generate_candidates("").is_empty());
    assert!(generate_candidates("   \n\t ").is_empty());
}

#[test]
fn test_single_word() {
    assert_eq!(generate_candidates("Hemoglobina"), vec!["hemoglobina"]);
}

#[test]
fn test_accented_input_keeps_original_first() {
    assert_eq!(generate_candidates("  Uréia "), vec!["uréia", "ureia"]);
}

#[test]
fn test_parenthetical_expansion() {
    assert_eq!(
        generate_candidates("TGO (AST)"),
        vec!["tgo (ast)", "ast", "tgo", "(ast)"]
    );
}

#[test]
fn test_parenthetical_with_accents() {
    let candidates = generate_candidates("Transaminase Glutâmico (Oxalacética)");
    assert_eq!(
        &candidates[..6],
        &[
            "transaminase glutâmico (oxalacética)",
            "transaminase glutamico (oxalacetica)",
            "oxalacética",
            "oxalacetica",
            "transaminase glutâmico",
            "transaminase glutamico",
        ]
    );
}

#[test]
fn test_only_first_parenthetical_is_extracted() {
    let candidates = generate_candidates("Colesterol (HDL) e (LDL)");
    assert!(candidates.contains(&"hdl".to_string()));
    assert!(!candidates.contains(&"ldl".to_string()));
    assert!(candidates.contains(&"colesterol e (ldl)".to_string()));
}

#[test]
fn test_modifier_stripping_and_ngrams() {
    assert_eq!(
        generate_candidates("Glicose de jejum"),
        vec![
            "glicose de jejum",
            "glicose jejum",
            "glicose de",
            "de jejum",
            "glicose",
            "jejum",
        ]
    );
}

#[test]
fn test_modifier_stripping_leaves_short_remainder() {
    assert_eq!(
        generate_candidates("Dosagem de Vitamina D"),
        vec![
            "dosagem de vitamina d",
            "d",
            "dosagem de vitamina",
            "de vitamina d",
            "dosagem de",
            "de vitamina",
            "vitamina d",
            "dosagem",
            "vitamina",
        ]
    );
}

#[test]
fn test_hyphenated_modifier_removed_before_tokenizing() {
    let candidates = generate_candidates("PROTEÍNA C REATIVA ULTRA-SENSÍVEL");
    assert_eq!(
        candidates,
        vec![
            "proteína c reativa ultra-sensível",
            "proteina c reativa ultra-sensivel",
            "proteina c reativa",
            "c reativa ultra",
            "reativa ultra sensivel",
            "proteina c",
            "c reativa",
            "reativa ultra",
            "ultra sensivel",
            "proteina",
            "reativa",
            "ultra",
            "sensivel",
        ]
    );
}

#[test]
fn test_separator_class() {
    let candidates = generate_candidates("Colesterol HDL; LDL + VLDL");
    assert_eq!(
        &candidates[1..],
        &[
            "colesterol hdl ldl",
            "hdl ldl vldl",
            "colesterol hdl",
            "hdl ldl",
            "ldl vldl",
            "colesterol",
            "hdl",
            "ldl",
            "vldl",
        ]
    );
}

#[test]
fn test_unigram_filters() {
    let candidates = generate_candidates("Pesquisa de X em Urina");
    for dropped in ["de", "em", "x"] {
        assert!(
            !candidates.contains(&dropped.to_string()),
            "{dropped:?} should not be a candidate"
        );
    }
    assert!(candidates.contains(&"pesquisa".to_string()));
    assert!(candidates.contains(&"urina".to_string()));
}

#[test]
fn test_compound_fallback_isolates_term() {
    assert_eq!(
        generate_candidates("Imunoeletroforese sérica"),
        vec![
            "imunoeletroforese sérica",
            "imunoeletroforese serica",
            "imunoeletroforese",
            "serica",
            "eletroforese",
        ]
    );
}

#[test]
fn test_no_duplicates() {
    let inputs = [
        "Eletroforese de Proteínas",
        "Hemograma Completo",
        "Glicose / Glicose",
        "TSH - TSH - TSH",
    ];
    for input in inputs {
        let candidates = generate_candidates(input);
        let mut unique = candidates.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), candidates.len(), "duplicates for {input:?}");
    }
}

#[test]
fn test_candidates_are_trimmed_and_non_empty() {
    for candidate in generate_candidates(" (  ) Ferritina ( Sérica ) ") {
        assert!(!candidate.is_empty());
        assert_eq!(candidate.trim(), candidate);
    }
}

#[test]
fn test_determinism() {
    let input = "Hemoglobina Glicada (HbA1c) - Método H.P.L.C";
    let first = generate_candidates(input);
    for _ in 0..10 {
        assert_eq!(generate_candidates(input), first);
    }
}

#[test]
fn test_modifier_patterns_sorted_longest_first_stable() {
    let lengths: Vec<usize> = MODIFIER_PATTERNS.iter().map(|p| p.term.len()).collect();
    assert!(lengths.windows(2).all(|w| w[0] >= w[1]));

    let position = |term: &str| MODIFIER_TERMS.iter().position(|t| *t == term);
    for pair in MODIFIER_PATTERNS.windows(2) {
        if pair[0].term.len() == pair[1].term.len() {
            assert!(position(pair[0].term) < position(pair[1].term));
        }
    }
    assert_eq!(MODIFIER_PATTERNS.len(), MODIFIER_TERMS.len());
}

#[test]
fn test_strip_modifiers_respects_word_boundaries() {
    assert_eq!(strip_modifiers("desidrogenase latica"), None);
    assert_eq!(
        strip_modifiers("lactato desidrogenase de plasma"),
        Some("lactato desidrogenase".to_string())
    );
}

#[test]
fn test_strip_modifiers_dotted_term() {
    assert_eq!(
        strip_modifiers("hemoglobina a2 h.p.l.c"),
        Some("hemoglobina a2".to_string())
    );
}

#[test]
fn test_strip_modifiers_everything_removed() {
    assert_eq!(strip_modifiers("dosagem total"), None);
    assert_eq!(generate_candidates("Dosagem Total"), vec!["dosagem total", "dosagem", "total"]);
}

#[test]
fn test_tokenize() {
    assert_eq!(tokenize("a;b+c/d-e f"), vec!["a", "b", "c", "d", "e", "f"]);
    assert_eq!(tokenize(" -;; "), Vec::<&str>::new());
}
