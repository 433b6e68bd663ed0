use std::io::Write;

use rand::Rng;

use super::state_table::StateTable;
use super::window::PrefixWindow;

/// Cap on the number of tokens emitted in one generated sequence.
pub const MAX_OUTPUT: usize = 200;

/// Walks a completed `StateTable` and produces a bounded pseudo-random
/// token sequence.
///
/// The walk starts from the start-of-document (all-sentinel) window and
/// is a two-state process: it keeps generating while the current window
/// is present in the table, and halts on the first missing window or
/// when the output cap is reached. Both outcomes are terminal.
///
/// # Responsibilities
/// - Track the current prefix window during generation
/// - Pick continuations through the table's random choice
/// - Drive the capped output loop and its formatting
#[derive(Debug)]
pub struct Generator {
	table: StateTable,
	window: PrefixWindow,
}

impl Generator {
	/// Creates a generator over a completed table, positioned at the
	/// start-of-document window.
	pub fn new(table: StateTable) -> Self {
		Self { table, window: PrefixWindow::sentinel() }
	}

	/// Resets the walk to the start-of-document window.
	pub fn reset(&mut self) {
		self.window = PrefixWindow::sentinel();
	}

	/// Produces the next token of the walk.
	///
	/// Looks up the current window, picks one continuation uniformly at
	/// random, slides the window with the chosen token and returns it.
	///
	/// Returns `None` when the current window was never observed as a
	/// prefix. This is the designed stop condition (end of chain), not
	/// an error.
	pub fn next_token<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
		let token = self.table.predict(&self.window, rng)?.to_owned();
		self.window.slide(&token);
		Some(token)
	}

	/// Generates a full sequence, writing it to `out` incrementally.
	///
	/// Resets the walk, then emits up to `max_output` tokens, each
	/// followed by a single space, writing each as soon as it is chosen.
	/// Whether the walk halts early or hits the cap, the token line is
	/// then terminated and one blank line is emitted.
	///
	/// Returns the number of tokens emitted.
	///
	/// # Errors
	/// Returns the underlying error if writing to `out` fails.
	pub fn write_sequence<R: Rng + ?Sized, W: Write>(
		&mut self,
		max_output: usize,
		rng: &mut R,
		out: &mut W,
	) -> std::io::Result<usize> {
		self.reset();

		let mut emitted = 0;
		for _ in 0..max_output {
			match self.next_token(rng) {
				Some(token) => {
					write!(out, "{} ", token)?;
					emitted += 1;
				}
				None => break,
			}
		}

		writeln!(out, "\n")?;
		Ok(emitted)
	}

	/// Returns the underlying state table.
	pub fn table(&self) -> &StateTable {
		&self.table
	}
}
