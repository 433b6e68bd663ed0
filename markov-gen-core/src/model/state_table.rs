use std::collections::HashMap;
use std::io::BufRead;

use rand::Rng;

use super::state::State;
use super::window::PrefixWindow;

/// Order-N Markov model over whitespace-delimited tokens.
///
/// The `StateTable` maps each prefix window observed in the input to the
/// ordered list of tokens seen to follow it. It owns the sliding window
/// used during construction, so tokens flow contiguously across calls:
/// line boundaries carry no semantic meaning.
///
/// # Responsibilities
/// - Consume an input stream line by line, token by token
/// - Accumulate continuation observations for each prefix window
/// - Predict the next token given a prefix window
///
/// # Invariants
/// - Every state holds at least one continuation
/// - Continuation lists preserve observation order and duplicates
/// - Tokens are the exact whitespace-delimited substrings of the input;
///   no normalization, case-folding, or punctuation stripping
#[derive(Clone, Debug)]
pub struct StateTable {
	/// Mapping from a prefix window to its corresponding state.
	states: HashMap<PrefixWindow, State>,

	/// Build-time window, persists across lines.
	window: PrefixWindow,
}

impl StateTable {
	/// Creates an empty table with the window at the start-of-document
	/// (all-sentinel) position.
	pub fn new() -> Self {
		Self { states: HashMap::new(), window: PrefixWindow::sentinel() }
	}

	/// Builds a complete table by consuming `reader` to exhaustion.
	///
	/// # Errors
	/// Returns the underlying error if reading a line fails.
	pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
		let mut table = Self::new();
		for line in reader.lines() {
			table.add_line(&line?);
		}
		Ok(table)
	}

	/// Feeds one line of input to the model.
	///
	/// Splits the line on whitespace runs and records each token. An
	/// empty or all-whitespace line contributes nothing.
	pub fn add_line(&mut self, line: &str) {
		for token in line.split_whitespace() {
			self.add_token(token);
		}
	}

	/// Records `token` as a continuation of the current prefix window,
	/// then slides the window forward so `token` becomes the newest
	/// prefix element.
	pub fn add_token(&mut self, token: &str) {
		let state = self.states.entry(self.window.clone()).or_insert_with(State::new);
		state.add_continuation(token);
		self.window.slide(token);
	}

	/// Predicts the next token for `window` by uniform random choice
	/// over its continuation list.
	///
	/// Returns `None` if `window` was never observed as a prefix. During
	/// generation this is the designed stop condition, not an error.
	pub fn predict<R: Rng + ?Sized>(&self, window: &PrefixWindow, rng: &mut R) -> Option<&str> {
		self.states.get(window)?.predict(rng)
	}

	/// Returns the continuations observed for `window`, in observation
	/// order, or `None` if the window is not in the table.
	pub fn continuations(&self, window: &PrefixWindow) -> Option<&[String]> {
		self.states.get(window).map(State::continuations)
	}

	/// Number of distinct prefix windows in the table.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// True if no token has been observed yet.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::StateTable;
	use super::super::window::{NON_WORD, PrefixWindow};

	#[test]
	fn empty_input_yields_empty_table() {
		let table = StateTable::from_reader(Cursor::new("")).unwrap();
		assert!(table.is_empty());
		assert_eq!(table.len(), 0);
	}

	#[test]
	fn single_token_input_yields_one_sentinel_state() {
		let table = StateTable::from_reader(Cursor::new("hello")).unwrap();
		assert_eq!(table.len(), 1);
		let sentinel = PrefixWindow::sentinel();
		assert_eq!(table.continuations(&sentinel).unwrap(), ["hello"]);
	}

	#[test]
	fn builds_expected_windows_for_short_sentence() {
		let table = StateTable::from_reader(Cursor::new("the cat sat on the mat\n")).unwrap();

		let expected = [
			([NON_WORD, NON_WORD], "the"),
			([NON_WORD, "the"], "cat"),
			(["the", "cat"], "sat"),
			(["cat", "sat"], "on"),
			(["sat", "on"], "the"),
			(["on", "the"], "mat"),
		];
		assert_eq!(table.len(), expected.len());
		for (tokens, next) in expected {
			let window = PrefixWindow::from_tokens(tokens);
			assert_eq!(table.continuations(&window).unwrap(), [next]);
		}

		// End of input: the final window was never seen as a prefix.
		let last = PrefixWindow::from_tokens(["the", "mat"]);
		assert_eq!(table.continuations(&last), None);
	}

	#[test]
	fn tokens_flow_across_line_boundaries() {
		let mut split = StateTable::new();
		split.add_line("the cat");
		split.add_line("sat");

		let joined = StateTable::from_reader(Cursor::new("the cat sat")).unwrap();

		assert_eq!(split.len(), joined.len());
		let window = PrefixWindow::from_tokens(["the", "cat"]);
		assert_eq!(split.continuations(&window), joined.continuations(&window));
		assert_eq!(split.continuations(&window).unwrap(), ["sat"]);
	}

	#[test]
	fn whitespace_runs_and_blank_lines_delimit_nothing() {
		let table = StateTable::from_reader(Cursor::new("a \t b\n\n  c\n")).unwrap();
		let joined = StateTable::from_reader(Cursor::new("a b c")).unwrap();
		assert_eq!(table.len(), joined.len());
		let window = PrefixWindow::from_tokens(["a", "b"]);
		assert_eq!(table.continuations(&window).unwrap(), ["c"]);
	}

	#[test]
	fn tokens_are_not_normalized() {
		let table = StateTable::from_reader(Cursor::new("The the THE!")).unwrap();
		let window = PrefixWindow::from_tokens(["The", "the"]);
		assert_eq!(table.continuations(&window).unwrap(), ["THE!"]);
	}

	#[test]
	fn duplicate_continuations_are_preserved_in_order() {
		let table =
			StateTable::from_reader(Cursor::new("z a b z a b z a b z a c")).unwrap();
		let window = PrefixWindow::from_tokens(["z", "a"]);
		assert_eq!(table.continuations(&window).unwrap(), ["b", "b", "b", "c"]);
	}

	#[test]
	fn window_keys_do_not_collide_on_token_boundaries() {
		// With keys formed by plain concatenation, ["ab","c"] and
		// ["a","bc"] would both map to "abc".
		let table = StateTable::from_reader(Cursor::new("ab c x a bc y")).unwrap();
		let left = PrefixWindow::from_tokens(["ab", "c"]);
		let right = PrefixWindow::from_tokens(["a", "bc"]);
		assert_eq!(table.continuations(&left).unwrap(), ["x"]);
		assert_eq!(table.continuations(&right).unwrap(), ["y"]);
	}

	#[test]
	fn table_structure_is_deterministic_for_fixed_input() {
		let input = "the cat sat on the mat and the cat sat still";
		let first = StateTable::from_reader(Cursor::new(input)).unwrap();
		let second = StateTable::from_reader(Cursor::new(input)).unwrap();

		assert_eq!(first.len(), second.len());
		let mut window = PrefixWindow::sentinel();
		for token in input.split_whitespace() {
			assert_eq!(first.continuations(&window), second.continuations(&window));
			window.slide(token);
		}
	}
}
