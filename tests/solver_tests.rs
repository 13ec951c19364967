use entropy_wordle::commands::{hint_for, run_test_all};
use entropy_wordle::core::{Pattern, Word, compute_feedback};
use entropy_wordle::solver::{
    CandidateStore, Method, Mode, NO_WORDS_LEFT, ScriptedInput, SolveOutcome, Solver, SolverConfig,
};
use entropy_wordle::wordlists::{Tables, WORDS_COUNT, default_universe};
use rayon::prelude::*;

fn embedded() -> (Vec<Word>, Tables) {
    (default_universe().unwrap(), Tables::embedded().unwrap())
}

#[test]
fn every_word_solves_or_fails_cleanly() {
    let (universe, tables) = embedded();
    let solver = Solver::new(&universe, &tables, SolverConfig::default());

    let outcomes: Vec<SolveOutcome> = universe
        .par_iter()
        .map(|secret| solver.solve_automatic(secret).unwrap().outcome)
        .collect();

    for outcome in outcomes {
        assert_ne!(outcome, SolveOutcome::Unsolvable);
        let code = outcome.code();
        assert!(code == -1 || (1..=6).contains(&code), "unexpected code {code}");
    }
}

#[test]
fn batch_histogram_covers_universe() {
    let (universe, tables) = embedded();
    let solver = Solver::new(&universe, &tables, SolverConfig::default());

    let report = run_test_all(&solver, &universe, false).unwrap();

    assert_eq!(universe.len(), WORDS_COUNT);
    assert_eq!(report.total, universe.len());
    assert_eq!(report.histogram.values().sum::<usize>(), universe.len());
    assert_eq!(report.histogram.len(), 7);
    assert!(report.solved() * 10 >= report.total * 9);
    assert!(report.average_attempts() > 1.0);
}

#[test]
fn first_guess_uses_info_table() {
    let (universe, tables) = embedded();
    let solver = Solver::new(&universe, &tables, SolverConfig::default());
    let store = CandidateStore::new(&universe);

    let selection = solver.selector().select_guess(&store).unwrap();

    assert_eq!(selection.word.text(), "crate");
    assert!(matches!(selection.method, Method::Info { .. }));
}

#[test]
fn hint_on_empty_list_is_sentinel() {
    let (universe, tables) = embedded();
    let solver = Solver::new(&universe, &tables, SolverConfig::default());

    assert_eq!(hint_for(&solver, &[]), NO_WORDS_LEFT);
}

#[test]
fn hint_after_feedback_matches_session() {
    let (universe, tables) = embedded();
    let solver = Solver::new(&universe, &tables, SolverConfig::default());
    let secret = Word::new("allot").unwrap();

    // narrow the list by hand, then ask for a hint
    let mut store = CandidateStore::new(&universe);
    let first = solver.selector().select_guess(&store).unwrap().word;
    assert_eq!(first.text(), "crate");
    store.filter(first, Pattern::compute(&secret, first));
    let remaining: Vec<Word> = store.candidates().iter().map(|&w| w.clone()).collect();
    let hinted = hint_for(&solver, &remaining);

    // allot is not the opener, so the game always reaches a second round
    let report = solver.solve_automatic(&secret).unwrap();
    assert!(report.rounds.len() > 1);
    assert_eq!(report.rounds[1].guess.text(), hinted);
}

#[test]
fn interactive_session_matches_automatic() {
    let (universe, tables) = embedded();
    let solver = Solver::new(&universe, &tables, SolverConfig::default());
    let secret = Word::new("earth").unwrap();

    let automatic = solver.solve_automatic(&secret).unwrap();
    let lines: Vec<String> = automatic
        .rounds
        .iter()
        .map(|round| round.pattern.to_string().to_lowercase())
        .collect();
    let mut input = ScriptedInput::new(lines);

    let interactive = solver
        .session()
        .solve(None, Mode::Interactive(&mut input), 6)
        .unwrap();

    assert_eq!(interactive.outcome, automatic.outcome);
    let guesses = |rounds: &[entropy_wordle::solver::Round<'_>]| {
        rounds.iter().map(|r| r.guess.text().to_string()).collect::<Vec<_>>()
    };
    assert_eq!(guesses(&interactive.rounds), guesses(&automatic.rounds));
}

#[test]
fn feedback_examples() {
    assert_eq!(compute_feedback("abcde", "abcde").unwrap(), Pattern::PERFECT);
    assert_eq!(compute_feedback("atoll", "allot").unwrap().to_string(), "GYYYY");
    assert!(compute_feedback("atol", "allot").is_err());
}
