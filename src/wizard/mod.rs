use crate::form::Field;

/// Position in the guided flow. A closed variant instead of a bare step
/// counter: every renderer match is exhaustive and an out-of-range step is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Intro,
    Question(Field),
    Review,
    Result,
}

impl WizardStep {
    /// Numeric step for display purposes: 0 intro, 1..=5 questions,
    /// 6 review, 7 result.
    pub fn display_index(self) -> usize {
        match self {
            WizardStep::Intro => 0,
            WizardStep::Question(f) => f.position(),
            WizardStep::Review => 6,
            WizardStep::Result => 7,
        }
    }
}

#[derive(Debug)]
pub struct Wizard {
    step: WizardStep,
}

impl Wizard {
    pub fn new() -> Self {
        Wizard {
            step: WizardStep::Intro,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Move one step forward. Saturates at the result view; advancing past it
    /// is a no-op rather than falling through to an undefined state.
    pub fn advance(&mut self) {
        self.step = match self.step {
            WizardStep::Intro => WizardStep::Question(Field::What),
            WizardStep::Question(f) => match f.next() {
                Some(next) => WizardStep::Question(next),
                None => WizardStep::Review,
            },
            WizardStep::Review => WizardStep::Result,
            WizardStep::Result => WizardStep::Result,
        };
    }

    /// Move one step back, never before the intro.
    pub fn retreat(&mut self) {
        self.step = match self.step {
            WizardStep::Intro => WizardStep::Intro,
            WizardStep::Question(f) => match f.prev() {
                Some(prev) => WizardStep::Question(prev),
                None => WizardStep::Intro,
            },
            WizardStep::Review => WizardStep::Question(Field::WhyHow),
            WizardStep::Result => WizardStep::Review,
        };
    }

    /// Jump straight to a question. Used from the review screen to re-edit
    /// one answer.
    pub fn jump_to(&mut self, field: Field) {
        self.step = WizardStep::Question(field);
    }

    pub fn reset(&mut self) {
        self.step = WizardStep::Intro;
    }
}
