// FAQ accordion: at most one answer expanded at a time

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    pub open: Option<usize>,
}

impl FaqState {
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let s = FaqState::default().toggle(0);
        assert!(s.is_open(0));
        let s = s.toggle(2);
        assert!(s.is_open(2));
        assert!(!s.is_open(0));
    }

    #[test]
    fn clicking_open_entry_collapses_it() {
        let s = FaqState::default().toggle(1).toggle(1);
        assert_eq!(s.open, None);
    }
}
