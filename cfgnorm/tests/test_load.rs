use cfgnorm::load::{GrammarLoadExt, LoadError};
use cfgnorm::{normalize, Grammar, MalformedGrammarError};
use test_case::test_case;

mod support;

const EXPRESSION_BNF: &str = "
# Expressions with relational, additive and multiplicative operators.
%start E
%terminals RO A MUL ID NUM BOOL UN LP RP
E   ::= O ROE
ROE ::= RO O ROE
      | ε
O   ::= T AO
AO  ::= A T AO | ε
T   ::= M MT
MT  ::= MUL M MT | ε ; M ::= ID | NUM | BOOL
M   ::= UN M | LP E RP
";

#[test]
fn test_load_expression_grammar() {
    let loaded = Grammar::load(EXPRESSION_BNF).unwrap();
    let built = support::expression_grammar();
    assert_eq!(loaded.to_string(), built.to_string());
    assert_eq!(loaded.terminals().len(), 9);
}

#[test]
fn test_terminals_from_keys() {
    let grammar = Grammar::load("S ::= a S b | ε").unwrap();
    assert!(grammar.is_terminal(grammar.symbol("a").unwrap()));
    assert!(grammar.is_nonterminal(grammar.symbol("S").unwrap()));
    support::assert_rules(&grammar, &[("S", &["a S b", "ε"])]);
}

#[test]
fn test_start_directive() {
    let grammar = Grammar::load("%start T\nS ::= a\nT ::= S").unwrap();
    assert_eq!(grammar.start(), grammar.symbol("T").unwrap());
    assert_eq!(grammar.to_string(), "%start T\nS ::= a\nT ::= S\n");
}

#[test]
fn test_continuation_after_blank_lines() {
    let grammar = Grammar::load("S ::= a\n\n  | b # second\n  | c\nT ::= t").unwrap();
    support::assert_rules(&grammar, &[("S", &["a", "b", "c"]), ("T", &["t"])]);
}

#[test]
fn test_normalized_display_loads_back() {
    for grammar in [
        support::expression_grammar(),
        support::load("E ::= E plus T | T\nT ::= T times F | F\nF ::= lp E rp | id"),
        support::load("%start T\nS ::= S x | y\nT ::= S z | S w"),
    ] {
        let normalized = normalize(&grammar).unwrap();
        let text = normalized.to_string();
        let reloaded = Grammar::load(&text).unwrap();
        assert_eq!(reloaded.to_string(), text);
        assert_eq!(reloaded.start(), reloaded.symbol(normalized.name_of(normalized.start())).unwrap());
    }
}

#[test_case("S ::= a\nT b", "expected `::=` after `T`, found `b`", 2, 3 ; "missing operator")]
#[test_case("S ::= a\nT", "expected `::=` after `T`, found end of input", 2, 1 ; "truncated rule")]
#[test_case("%foo bar\nS ::= a", "unknown directive `%foo`", 1, 1 ; "unknown directive")]
#[test_case("%start\nS ::= a", "`%start` takes exactly one name", 1, 1 ; "start without name")]
#[test_case("S ::= a ::= b", "unexpected `::=` in alternative", 1, 9 ; "operator in alternative")]
#[test_case("| a", "expected a rule or a directive, found `|`", 1, 1 ; "leading pipe")]
fn test_syntax_error(bnf: &str, reason: &str, line: u32, col: u32) {
    assert_eq!(
        Grammar::load(bnf).unwrap_err(),
        LoadError::Syntax {
            reason: reason.to_string(),
            line,
            col,
        }
    );
}

#[test]
fn test_syntax_error_message() {
    let err = Grammar::load("S ::= a\nT b").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected `::=` after `T`, found `b` at line 2, column 3"
    );
}

#[test_case(
    "%terminals a\nS ::= a X",
    MalformedGrammarError::UnknownNonterminal {
        nonterminal: "S".to_string(),
        production: "a X".to_string(),
        symbol: "X".to_string(),
    } ;
    "undeclared symbol"
)]
#[test_case(
    "S ::= a | | b",
    MalformedGrammarError::EmptyProduction { nonterminal: "S".to_string(), index: 1 } ;
    "empty alternative"
)]
#[test_case(
    "S ::= a ε",
    MalformedGrammarError::MisplacedEpsilon { nonterminal: "S".to_string(), production: "a ε".to_string() } ;
    "misplaced epsilon"
)]
#[test_case(
    "%start Z\nS ::= a",
    MalformedGrammarError::UnknownStart { name: "Z".to_string() } ;
    "unknown start"
)]
#[test_case("# nothing here\n", MalformedGrammarError::NoRules ; "no rules")]
fn test_malformed(bnf: &str, expected: MalformedGrammarError) {
    assert_eq!(
        Grammar::load(bnf).unwrap_err(),
        LoadError::Malformed(expected)
    );
}
