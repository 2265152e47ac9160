/// Which gesture, if any, the recognizer currently believes is in progress.
///
/// Gestures are mutually exclusive, so a single value covers the whole
/// target. With no tracked contacts the state is always `Idle`; the
/// multi-contact states always have exactly two tracked contacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RecognizerState {
    #[default]
    Idle,
    /// One contact is down and could still become a tap, press or pan.
    PossibleTap,
    Pressing,
    Panning,
    /// Transient: a pan just ended fast enough to be reported as a swipe.
    Swiping,
    /// Two contacts are down but have not yet separated enough to pinch.
    PossibleMultiContact,
    Pinching,
    /// The contact left over from a two-contact span; it reports nothing.
    Canceled,
}

impl RecognizerState {
    /// True while both tracked contacts take part in the gesture.
    pub fn is_multi_contact(self) -> bool {
        matches!(
            self,
            RecognizerState::PossibleMultiContact | RecognizerState::Pinching
        )
    }
}
