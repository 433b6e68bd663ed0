use rand::Rng;
use rand::prelude::IndexedRandom;

/// Represents a state in the Markov chain.
///
/// A `State` corresponds to one prefix window and stores every token
/// observed to follow that prefix anywhere in the input, in observation
/// order, with duplicates preserved.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations: a token recorded k
/// times is k times more likely to be chosen.
///
/// ## Responsibilities:
/// - Accumulate continuation observations during learning
/// - Predict the next token using uniform random sampling over the list
///
/// ## Invariants
/// - Continuations appear in the order they were observed
#[derive(Clone, Debug)]
pub struct State {
	/// Observed continuations, duplicates preserved.
	/// Example: ["the", "a", "the", "the"]
	continuations: Vec<String>,
}

impl State {
	/// Creates a new empty state.
	pub fn new() -> Self {
		Self { continuations: Vec::new() }
	}

	/// Records an observation of `token` following this state's prefix.
	pub fn add_continuation(&mut self, token: &str) {
		self.continuations.push(token.to_owned());
	}

	/// Predicts the next token by picking one continuation uniformly
	/// at random.
	///
	/// Duplicate entries bias the choice linearly toward more frequent
	/// continuations.
	///
	/// Returns `None` if the state has no continuations.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.continuations.choose(rng).map(String::as_str)
	}

	/// Returns the observed continuations, in observation order.
	pub fn continuations(&self) -> &[String] {
		&self.continuations
	}
}
