#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AutoPlayState {
    Playing, // Timer armed, slides advance on their own
    Paused,  // Pointer is over the carousel or the user navigated manually
}

impl AutoPlayState {
    pub fn is_playing(self) -> bool {
        self == AutoPlayState::Playing
    }
}

impl From<bool> for AutoPlayState {
    fn from(playing: bool) -> Self {
        if playing {
            AutoPlayState::Playing
        } else {
            AutoPlayState::Paused
        }
    }
}
