use crate::grid::{Heading, Position};

/// Number of body segments behind the head in a fresh snake.
pub const STARTING_BODY_LEN: usize = 3;

/// Snake head, body and buffered heading changes.
///
/// The body is stored separately from the head, nearest segment first.
#[derive(Debug, Clone)]
pub struct Snake {
    head: Position,
    body: Vec<Position>,
    heading: Heading,
    buffered_heading: Heading,
    next_buffered_heading: Option<Heading>,
}

impl Snake {
    /// Creates a snake at `head` with its body trailing straight behind it.
    #[must_use]
    pub fn new(head: Position, heading: Heading) -> Self {
        let body = (1..=STARTING_BODY_LEN)
            .map(|distance| head.stepped(heading, -(distance as i32)))
            .collect();

        Self::from_parts(head, body, heading)
    }

    /// Creates a snake from an explicit head and body (nearest segment first).
    #[must_use]
    pub fn from_parts(head: Position, body: Vec<Position>, heading: Heading) -> Self {
        Self {
            head,
            body,
            heading,
            buffered_heading: heading,
            next_buffered_heading: None,
        }
    }

    /// Requests a turn; requests along the axis of the heading they would
    /// follow are ignored.
    ///
    /// The first accepted request replaces the buffered heading. A second
    /// one, arriving before the next move, is held for the move after that
    /// with last-input-wins semantics.
    pub fn turn(&mut self, heading: Heading) {
        if self.buffered_heading == self.heading {
            if heading.axis() != self.heading.axis() {
                self.buffered_heading = heading;
            }
        } else if heading.axis() != self.buffered_heading.axis() {
            self.next_buffered_heading = Some(heading);
        }
    }

    /// Advances one cell: every segment takes its predecessor's previous
    /// position, then the head steps along the heading.
    pub fn advance(&mut self) {
        self.heading = self.buffered_heading;
        if let Some(next) = self.next_buffered_heading.take() {
            self.buffered_heading = next;
        }

        if !self.body.is_empty() {
            self.body.pop();
            self.body.insert(0, self.head);
        }

        self.head = self.head.stepped(self.heading, 1);
    }

    /// Appends one segment on top of the current tail.
    ///
    /// The duplicate separates on the next `advance`, so the snake appears
    /// one cell longer from that tick on.
    pub fn add_segment(&mut self) {
        let tail = self.body.last().copied().unwrap_or(self.head);
        self.body.push(tail);
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    /// Body segments, nearest to the head first.
    #[must_use]
    pub fn body(&self) -> &[Position] {
        &self.body
    }

    /// Heading used by the most recent move.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Heading the next move will use.
    #[must_use]
    pub fn buffered_heading(&self) -> Heading {
        self.buffered_heading
    }

    /// Returns true if the head sits exactly on a body segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// Returns true if the head or any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.head == position || self.body.contains(&position)
    }

    /// Segment count including the head.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }
}
