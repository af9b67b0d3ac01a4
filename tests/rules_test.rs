use reflekt::rules::{PatternBank, ResponseKind, ResponseSelector};
use reflekt::session::Session;
use reflekt::types::{Language, Utterance};

fn first_rule(language: Language, raw: &str) -> &'static str {
    let bank = PatternBank::builtin(language);
    let utterance = Utterance::from_raw(raw);
    bank.find(&utterance).map(|(rule, _)| rule.id).unwrap()
}

#[test]
fn family_keywords_outrank_feelings() {
    assert_eq!(first_rule(Language::En, "I feel sad about my mother"), "mother");
    assert_eq!(first_rule(Language::En, "I feel sad"), "i_feel");
    assert_eq!(first_rule(Language::Sv, "jag känner mig ledsen för min mamma"), "mother");
}

#[test]
fn more_specific_prefix_wins() {
    assert_eq!(first_rule(Language::Sv, "jag känner mig trött"), "i_feel_self");
    assert_eq!(first_rule(Language::Sv, "jag känner dig"), "i_feel");
    assert_eq!(first_rule(Language::En, "why don't you listen"), "why_dont_you");
    assert_eq!(first_rule(Language::En, "why is the sky blue"), "why");
}

#[test]
fn questions_without_a_specific_rule() {
    assert_eq!(first_rule(Language::En, "Is the sky blue?"), "question");
    assert_eq!(first_rule(Language::En, "Is the sky blue"), "fallback");
}

#[test]
fn every_rule_has_templates_and_banks_end_with_catch_all() {
    for language in [Language::En, Language::Sv] {
        let bank = PatternBank::builtin(language);
        assert_eq!(bank.language(), language);
        assert!(bank.rules().iter().all(|r| !r.templates.is_empty()));
        assert!(bank.rules().last().unwrap().is_catch_all());
        assert!(!bank.phrasebook().farewells.is_empty());
        assert!(!bank.phrasebook().exit_phrases.is_empty());
    }
}

#[test]
fn scenario_mother_reflects_clause() {
    let selector = ResponseSelector::builtin();
    let mut session = Session::new(1, Language::En);
    let response = selector.select(
        &Utterance::from_raw("I feel sad about my mother"),
        &mut session,
    );

    assert_eq!(response.rule, "mother");
    assert_eq!(response.kind, ResponseKind::Rule);
    assert!(response.text.contains("you feel sad about your mother"));
    assert!(!response.text.contains("my mother"));
}

#[test]
fn templates_rotate_before_repeating() {
    let selector = ResponseSelector::builtin();
    let bank = selector.bank(Language::En);
    let need = bank.rules().iter().find(|r| r.id == "need").unwrap();
    let n = need.templates.len();

    let mut session = Session::new(1, Language::En);
    let utterance = Utterance::from_raw("I need a holiday");
    let texts: Vec<String> = (0..=n)
        .map(|_| selector.select(&utterance, &mut session).text)
        .collect();

    for i in 0..n {
        for j in (i + 1)..n {
            assert_ne!(texts[i], texts[j], "repeated within one rotation");
        }
    }
    assert_eq!(texts[n], texts[0]);
    assert_eq!(session.usage.uses(Language::En, "need"), n + 1);
}

#[test]
fn responses_are_never_empty_and_never_leak_slots() {
    let selector = ResponseSelector::builtin();
    let inputs = [
        (Language::En, "hello"),
        (Language::En, "xyzzy"),
        (Language::En, "I"),
        (Language::En, "my"),
        (Language::En, "why?"),
        (Language::Sv, "hej"),
        (Language::Sv, "ok"),
        (Language::Sv, "jag vill"),
        (Language::Sv, "varför"),
    ];

    for (language, raw) in inputs {
        let mut session = Session::new(1, language);
        for _ in 0..12 {
            let r = selector.select(&Utterance::from_raw(raw), &mut session);
            assert!(!r.text.trim().is_empty(), "{language}: {raw}");
            assert!(!r.text.contains("{0}"), "{language}: {raw} -> {}", r.text);
            assert_eq!(r.language, language);
        }
    }
}

#[test]
fn exit_phrases_from_either_language() {
    let selector = ResponseSelector::builtin();
    assert_eq!(
        selector.exit_phrase(&Utterance::from_raw("ok goodbye then")),
        Some("goodbye")
    );
    assert_eq!(selector.exit_phrase(&Utterance::from_raw("Hej då!")), Some("hej då"));
    assert_eq!(selector.exit_phrase(&Utterance::from_raw("byebye")), None);
}

#[test]
fn farewell_is_in_active_language() {
    let selector = ResponseSelector::builtin();
    let mut session = Session::new(1, Language::Sv);
    let r = selector.select(&Utterance::from_raw("bye"), &mut session);
    assert_eq!(r.kind, ResponseKind::Farewell);
    assert_eq!(r.language, Language::Sv);
    assert_eq!(r.text, "Hejdå!");
    assert!(r.ends_session());
}

#[test]
fn unmatched_input_uses_catch_all() {
    let selector = ResponseSelector::builtin();
    let mut session = Session::new(1, Language::Sv);
    let r = selector.select(&Utterance::from_raw("ok"), &mut session);
    assert_eq!(r.kind, ResponseKind::CatchAll);
    assert_eq!(r.text, "Berätta mer.");
}

#[test]
fn bare_opener_is_answered_by_its_own_rule() {
    let selector = ResponseSelector::builtin();
    let cases = [
        (Language::En, "I am", "i_am"),
        (Language::En, "I need", "need"),
        (Language::En, "My", "my"),
        (Language::En, "Why", "why"),
        (Language::Sv, "varför", "why"),
        (Language::Sv, "jag vill", "i_want"),
        (Language::Sv, "min", "my"),
    ];

    for (language, raw, rule) in cases {
        let mut session = Session::new(1, language);
        let r = selector.select(&Utterance::from_raw(raw), &mut session);
        assert_eq!(r.rule, rule, "{language}: {raw}");
        assert_eq!(r.kind, ResponseKind::Rule);
        assert!(!r.text.contains("{0}"));
    }
}
