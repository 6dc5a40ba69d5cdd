/// Width of the zero-padded identifier. Values past 999999 keep growing.
const ID_WIDTH: usize = 6;

/// Issues strictly increasing record identifiers starting after `last`.
#[derive(Debug)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new(last: u64) -> Self {
        IdAllocator { last }
    }

    pub fn next_id(&mut self) -> String {
        self.last += 1;
        format!("{:0width$}", self.last, width = ID_WIDTH)
    }

    /// Value to persist: the last identifier handed out.
    pub fn last(&self) -> u64 {
        self.last
    }
}
