use radix_pattern::{escape, Config, Group, Trie};
use regex::Regex;

// Anchors the rendered pattern so it must match the whole input
fn compile(trie: &Trie) -> Regex {
    Regex::new(&format!("^(?:{})$", trie.pattern())).unwrap()
}

fn trie_of(words: &[&str]) -> Trie {
    words.iter().copied().collect()
}

#[test]
fn test_prefix_compression() {
    let trie = trie_of(&["cat", "car", "cab"]);
    assert_eq!(trie.pattern(), "(ca(b|r|t))");

    let re = compile(&trie);
    assert!(re.is_match("cat"));
    assert!(re.is_match("car"));
    assert!(re.is_match("cab"));

    assert!(!re.is_match("ca"));
    assert!(!re.is_match("ca1"));
    assert!(!re.is_match("cats"));
    assert!(!re.is_match(""));
}

#[test]
fn test_escaping() {
    let trie = trie_of(&["a.b*c"]);
    let re = compile(&trie);

    assert!(re.is_match("a.b*c"));
    assert!(!re.is_match("axbyyc"));
    assert!(!re.is_match("a.bc"));
    assert!(!re.is_match("a.bbbc"));
}

#[test]
fn test_every_meta_character() {
    let words = [
        r"\", "*", "+", ".", "?", "{", "}", "(", ")", "[", "]", "^", "$", "|", "{1,2}", "[a-z]",
        "(?:x)", r"\d", "a|b", "^$",
    ];
    let trie = trie_of(&words);
    let re = compile(&trie);

    for word in &words {
        assert!(re.is_match(word), "{:?} should match {}", word, trie.pattern());
    }

    for other in &["", "a", "b", "x", "aa", "5", "az", "\\\\", "**"] {
        assert!(!re.is_match(other), "{:?} should not match {}", other, trie.pattern());
    }
}

#[test]
fn test_empty_string_alone() {
    let trie = trie_of(&[""]);
    assert_eq!(trie.pattern(), "()");

    let re = compile(&trie);
    assert!(re.is_match(""));
    assert!(!re.is_match("a"));
    assert!(!re.is_match(" "));
}

#[test]
fn test_empty_string_with_others() {
    let trie = trie_of(&["x", "", "xy"]);
    let re = compile(&trie);

    assert!(re.is_match(""));
    assert!(re.is_match("x"));
    assert!(re.is_match("xy"));
    assert!(!re.is_match("y"));
    assert!(!re.is_match("xyz"));
}

#[test]
fn test_prefix_of_existing_both_orders() {
    let short_first = trie_of(&["ab", "abc"]);
    let long_first = trie_of(&["abc", "ab"]);

    assert_eq!(short_first, long_first);
    assert_eq!(short_first.pattern(), long_first.pattern());

    for trie in &[short_first, long_first] {
        let re = compile(trie);
        assert!(re.is_match("ab"));
        assert!(re.is_match("abc"));
        assert!(!re.is_match("a"));
        assert!(!re.is_match("abcc"));
        assert!(!re.is_match("abd"));
    }
}

#[test]
fn test_split_inside_existing_label() {
    // "abcdef" is split twice, first in the middle then near the front
    let trie = trie_of(&["abcdef", "abcxyz", "ab"]);
    assert_eq!(trie.pattern(), "(ab(|c(def|xyz)))");

    let re = compile(&trie);
    for word in &["abcdef", "abcxyz", "ab"] {
        assert!(re.is_match(word));
    }
    for word in &["abc", "abcd", "abcx", "a"] {
        assert!(!re.is_match(word));
    }
}

#[test]
fn test_multibyte_symbols() {
    let trie = trie_of(&["日本", "日曜", "naïve", "naïf"]);
    assert_eq!(trie.pattern(), "(naï(f|ve)|日(曜|本))");

    let re = compile(&trie);
    assert!(re.is_match("日本"));
    assert!(re.is_match("naïf"));
    assert!(!re.is_match("日"));
    assert!(!re.is_match("nai"));
}

#[test]
fn test_non_capturing_groups() {
    let mut trie = Trie::with_config(Config::new().group(Group::NonCapturing));
    trie.extend(vec!["foo", "foobar", "fizz"]);
    assert_eq!(trie.pattern(), "(?:f(?:izz|oo(?:|bar)))");

    let re = compile(&trie);
    assert_eq!(re.captures_len(), 1);
    assert!(re.is_match("foo"));
    assert!(re.is_match("foobar"));
    assert!(re.is_match("fizz"));
    assert!(!re.is_match("fo"));
}

#[test]
fn test_embedding_in_larger_pattern() {
    let trie = trie_of(&["if", "else", "elif", "while"]);
    let re = Regex::new(&format!(r"\b{}\b", trie.pattern())).unwrap();

    let found: Vec<&str> = re
        .find_iter("if x: pass elif y: while z else")
        .map(|m| m.as_str())
        .collect();
    assert_eq!(found, ["if", "elif", "while", "else"]);
}

#[test]
fn test_escape_matches_literally() {
    let text = "1+1=2? (yes) [sure] {ok} ^_^ $5 a|b c\\d";
    let re = Regex::new(&format!("^{}$", escape(text))).unwrap();

    assert!(re.is_match(text));
    assert!(!re.is_match("11=2"));
}

#[test]
fn test_contains_agrees_with_pattern() {
    let words = ["", "a", "ab", "abc", "b", "ba", "bab", "c.d"];
    let trie = trie_of(&words);
    let re = compile(&trie);

    let probes = ["", "a", "ab", "abc", "abcd", "b", "ba", "bab", "bb", "c", "c.d", "cxd", "d"];
    for probe in &probes {
        assert_eq!(trie.contains(*probe), re.is_match(probe), "probe {:?}", probe);
        assert_eq!(trie.contains(*probe), words.contains(probe), "probe {:?}", probe);
    }
}
