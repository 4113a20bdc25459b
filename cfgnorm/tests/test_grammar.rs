use cfgnorm::{
    GrammarBuilder, MalformedGrammarError, Production, SymbolKind, TerminalSet, EPSILON,
};
use test_case::test_case;

mod support;

#[test]
fn test_build_interns_keys_first() {
    let grammar = support::expression_grammar();
    assert_eq!(
        support::nonterminal_names(&grammar),
        ["E", "ROE", "O", "AO", "T", "MT", "M"]
    );
    let e = grammar.symbol("E").unwrap();
    assert_eq!(grammar.start(), e);
    assert_eq!(e.usize(), 0);
    assert!(grammar.is_nonterminal(e));
    assert!(grammar.is_terminal(grammar.symbol("LP").unwrap()));
    assert_eq!(grammar.terminals().len(), 9);
    assert_eq!(grammar.num_nonterminals(), 7);
    assert_eq!(grammar.num_productions(), 14);
    assert_eq!(grammar.validate(), Ok(()));
}

#[test]
fn test_productions_by_name() {
    let grammar = support::expression_grammar();
    let roe = grammar.productions_by_name("ROE").unwrap();
    assert_eq!(roe.len(), 2);
    assert!(roe[1].is_epsilon());
    assert_eq!(grammar.stringify_production(&roe[0]), "RO O ROE");
    assert!(grammar.productions_by_name("RO").is_none());
    assert!(grammar.productions_by_name("missing").is_none());
}

#[test]
fn test_duplicate_alternatives_are_merged() {
    let grammar = GrammarBuilder::new()
        .rule("S")
        .rhs(["a"])
        .rhs(["b"])
        .rule("S")
        .rhs(["a"])
        .build_classified_by_keys()
        .unwrap();
    support::assert_rules(&grammar, &[("S", &["a", "b"])]);
}

#[test]
fn test_clone_is_independent() {
    let grammar = support::expression_grammar();
    let mut copy = grammar.clone();
    let m = copy.symbol("M").unwrap();
    let id = copy.symbol("ID").unwrap();
    copy.set_productions(m, [Production::new([id])]);
    let new_sym = copy.add_nonterminal("N").unwrap();
    copy.set_productions(new_sym, [Production::epsilon()]);

    assert_eq!(grammar.productions(m).len(), 5);
    assert!(grammar.symbol("N").is_none());
    assert_eq!(copy.productions(m).len(), 1);
}

#[test]
fn test_add_nonterminal_rejects_taken_name() {
    let mut grammar = support::expression_grammar();
    assert_eq!(
        grammar.add_nonterminal("ID"),
        Err(MalformedGrammarError::DuplicateName {
            name: "ID".to_string()
        })
    );
}

#[test]
fn test_validate_rejects_nonterminal_without_alternatives() {
    let mut grammar = support::expression_grammar();
    assert_eq!(grammar.validate(), Ok(()));
    grammar.add_nonterminal("N").unwrap();
    assert_eq!(
        grammar.validate(),
        Err(MalformedGrammarError::NoAlternatives {
            nonterminal: "N".to_string()
        })
    );
}

#[test]
fn test_classify_with_closure() {
    let grammar = GrammarBuilder::new()
        .rule("list")
        .rhs(["ITEM", "list"])
        .rhs([EPSILON])
        .build_with(&|name: &str| {
            if name.chars().all(|ch| ch.is_ascii_uppercase()) {
                SymbolKind::Terminal
            } else {
                SymbolKind::Nonterminal
            }
        })
        .unwrap();
    assert!(grammar.is_terminal(grammar.symbol("ITEM").unwrap()));
    support::assert_rules(&grammar, &[("list", &["ITEM list", "ε"])]);
}

#[test]
fn test_terminal_set() {
    let terminals: TerminalSet = ["a", "b"].into_iter().collect();
    let grammar = GrammarBuilder::new()
        .rule("S")
        .rhs(["a", "b"])
        .build_with(&terminals)
        .unwrap();
    assert_eq!(grammar.terminals().len(), 2);
}

#[test]
fn test_custom_epsilon_marker() {
    let grammar = GrammarBuilder::new()
        .rule("S")
        .rhs(["a"])
        .rhs(["EMPTY"])
        .epsilon_marker("EMPTY")
        .build_classified_by_keys()
        .unwrap();
    support::assert_rules(&grammar, &[("S", &["a", "ε"])]);
}

#[test]
fn test_no_rules() {
    assert_eq!(
        GrammarBuilder::new().build().unwrap_err(),
        MalformedGrammarError::NoRules
    );
}

#[test_case(
    GrammarBuilder::new().rule("S").rhs(["a"]).rhs(Vec::<String>::new()).terminals(["a"]),
    MalformedGrammarError::EmptyProduction { nonterminal: "S".to_string(), index: 1 } ;
    "empty alternative"
)]
#[test_case(
    GrammarBuilder::new().rule("S").rhs(["a", EPSILON]).terminals(["a"]),
    MalformedGrammarError::MisplacedEpsilon { nonterminal: "S".to_string(), production: "a ε".to_string() } ;
    "epsilon with other symbols"
)]
#[test_case(
    GrammarBuilder::new().rule("S").rhs(["a", "X"]).terminals(["a"]),
    MalformedGrammarError::UnknownNonterminal {
        nonterminal: "S".to_string(),
        production: "a X".to_string(),
        symbol: "X".to_string(),
    } ;
    "dangling nonterminal"
)]
#[test_case(
    GrammarBuilder::new().rule("S").rhs(["a"]).rule("a").rhs(["b"]).terminals(["a", "b"]),
    MalformedGrammarError::TerminalWithProductions { name: "a".to_string() } ;
    "terminal on the left-hand side"
)]
#[test_case(
    GrammarBuilder::new().rule("S").rhs(["a"]).terminals(["a"]).start("Z"),
    MalformedGrammarError::UnknownStart { name: "Z".to_string() } ;
    "unknown start symbol"
)]
#[test_case(
    GrammarBuilder::new().rule("S").rhs(["a"]).terminals(["a"]).start("a"),
    MalformedGrammarError::UnknownStart { name: "a".to_string() } ;
    "terminal start symbol"
)]
#[test_case(
    GrammarBuilder::new().rule("S").rhs(["a"]).rule("T").terminals(["a"]).start("T"),
    MalformedGrammarError::NoAlternatives { nonterminal: "T".to_string() } ;
    "rule without alternatives"
)]
fn test_malformed(builder: GrammarBuilder, expected: MalformedGrammarError) {
    assert_eq!(builder.build().unwrap_err(), expected);
}

#[test]
fn test_error_messages_carry_names() {
    let err = GrammarBuilder::new()
        .rule("S")
        .rhs(["a", "X"])
        .terminals(["a"])
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "`S ::= a X` references unknown nonterminal `X`"
    );
}

#[test]
fn test_display() {
    let grammar = support::expression_grammar();
    assert_eq!(
        grammar.to_string(),
        "E ::= O ROE\n\
         ROE ::= RO O ROE | ε\n\
         O ::= T AO\n\
         AO ::= A T AO | ε\n\
         T ::= M MT\n\
         MT ::= MUL M MT | ε\n\
         M ::= ID | NUM | BOOL | UN M | LP E RP\n"
    );
    assert_eq!(grammar.stringify_to_bnf(), grammar.to_string());
}

#[test]
fn test_display_names_start_when_not_first() {
    let grammar = GrammarBuilder::new()
        .rule("S")
        .rhs(["a"])
        .rule("T")
        .rhs(["S"])
        .start("T")
        .build_classified_by_keys()
        .unwrap();
    assert_eq!(grammar.to_string(), "%start T\nS ::= a\nT ::= S\n");
}
