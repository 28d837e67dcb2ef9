pub mod rand {
    use std::cell::RefCell;

    use crate::rand::Random;

    /// Replays a fixed sequence of draws
    #[derive(Debug, Default)]
    pub struct FakeRandom {
        random_sequence: RefCell<Vec<u32>>,
    }

    impl FakeRandom {
        pub fn with_random_sequence(self, sequence: Vec<u32>) -> Self {
            self.random_sequence.replace(sequence);
            self.random_sequence.borrow_mut().reverse();
            self
        }

        pub fn remaining(&self) -> usize {
            self.random_sequence.borrow().len()
        }
    }

    impl Random for FakeRandom {
        fn draw32(&self) -> u32 {
            self.random_sequence
                .borrow_mut()
                .pop()
                .expect("should not be empty")
        }
    }
}
