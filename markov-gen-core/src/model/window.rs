/// Number of tokens in a prefix window (the chain order).
pub const N_PREFIX: usize = 2;

/// Sentinel token used to pad the window before enough real tokens
/// have been seen. A line break can never occur inside a real token
/// because tokens are produced by whitespace splitting.
pub const NON_WORD: &str = "\n";

/// Fixed-size sliding window over the most recently seen tokens.
///
/// A `PrefixWindow` is the lookup key into the state table. The window
/// is kept as an ordered array of owned tokens and hashed element-wise,
/// so two windows compare equal only if their token sequences match.
///
/// # Invariants
/// - The window always holds exactly `N_PREFIX` tokens
/// - Sentinel padding only ever occupies the oldest positions
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PrefixWindow {
	tokens: [String; N_PREFIX],
}

impl PrefixWindow {
	/// Creates the start-of-document window: `N_PREFIX` sentinel copies.
	pub fn sentinel() -> Self {
		Self { tokens: std::array::from_fn(|_| NON_WORD.to_owned()) }
	}

	/// Creates a window directly from `N_PREFIX` tokens, oldest first.
	pub fn from_tokens(tokens: [&str; N_PREFIX]) -> Self {
		Self { tokens: tokens.map(str::to_owned) }
	}

	/// Slides the window forward: drops the oldest token and appends
	/// `token` as the newest.
	pub fn slide(&mut self, token: &str) {
		self.tokens.rotate_left(1);
		self.tokens[N_PREFIX - 1] = token.to_owned();
	}

	/// Returns the window contents, oldest first.
	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}
}
