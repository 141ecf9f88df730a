/*!
# Argline: Scanner.

A cursor over an immutable line of text. Reads outside the text never fail;
they simply return `None`, which doubles as the end-of-input marker.
*/



#[derive(Debug, Clone)]
/// # Scanner.
///
/// The cursor is a signed index and is never clamped, so it may wander off
/// either end of the text. When it does, [`Scanner::current`] and friends
/// just report `None` until it finds its way back.
///
/// ## Examples
///
/// ```
/// use argline::Scanner;
///
/// let mut s = Scanner::new("  hello world");
/// assert_eq!(s.skip_while(char::is_whitespace), 2);
/// assert_eq!(s.collect_while(|c| ! c.is_whitespace()), "hello");
/// assert_eq!(s.current(), Some(' '));
/// ```
pub struct Scanner {
	/// # Text.
	chars: Box<[char]>,

	/// # Cursor.
	pos: isize,
}

impl From<&str> for Scanner {
	#[inline]
	fn from(src: &str) -> Self { Self::new(src) }
}

impl Scanner {
	#[must_use]
	/// # New.
	pub fn new(src: &str) -> Self {
		Self {
			chars: src.chars().collect(),
			pos: 0,
		}
	}

	#[must_use]
	/// # Cursor Position.
	pub const fn pos(&self) -> isize { self.pos }

	#[must_use]
	/// # Length (in Chars).
	pub fn len(&self) -> usize { self.chars.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.chars.is_empty() }

	#[must_use]
	/// # Done?
	///
	/// Returns `true` if the cursor is outside the text.
	pub fn is_done(&self) -> bool { self.current().is_none() }

	#[must_use]
	/// # Current Character.
	pub fn current(&self) -> Option<char> { self.get(self.pos) }

	/// # Advance.
	///
	/// Move the cursor `amount` places (negative values move it backwards)
	/// and return the new current character.
	pub fn advance(&mut self, amount: isize) -> Option<char> {
		self.pos = self.pos.saturating_add(amount);
		self.current()
	}

	/// # Retreat.
	///
	/// The mirror of [`Scanner::advance`].
	pub fn retreat(&mut self, amount: isize) -> Option<char> {
		self.pos = self.pos.saturating_sub(amount);
		self.current()
	}

	#[must_use]
	/// # Peek.
	///
	/// Return the character `offset` places from the cursor without moving.
	pub fn peek(&self, offset: isize) -> Option<char> {
		self.get(self.pos.saturating_add(offset))
	}

	#[must_use]
	/// # Absolute or Relative Read.
	///
	/// Positive indices are absolute. Zero and negative indices count
	/// backwards from the cursor, so `0` is the current character and `-1`
	/// the one before it.
	pub fn at(&self, index: isize) -> Option<char> {
		if 0 < index { self.get(index) }
		else { self.get(self.pos.saturating_sub(index.saturating_abs())) }
	}

	/// # Collect While.
	///
	/// Accumulate characters while `pred` holds, stepping the cursor once
	/// per accepted character. The cursor is left on the first rejected
	/// character (or past the end).
	pub fn collect_while<F>(&mut self, mut pred: F) -> String
	where F: FnMut(char) -> bool {
		let mut out = String::new();
		while let Some(c) = self.current() {
			if ! pred(c) { break; }
			out.push(c);
			self.pos += 1;
		}
		out
	}

	/// # Skip While.
	///
	/// Same as [`Scanner::collect_while`], but the characters are thrown
	/// away. Returns the number skipped.
	pub fn skip_while<F>(&mut self, mut pred: F) -> usize
	where F: FnMut(char) -> bool {
		let mut skipped = 0;
		while let Some(c) = self.current() {
			if ! pred(c) { break; }
			skipped += 1;
			self.pos += 1;
		}
		skipped
	}

	/// # Get Character.
	fn get(&self, idx: isize) -> Option<char> {
		usize::try_from(idx).ok().and_then(|idx| self.chars.get(idx).copied())
	}
}
