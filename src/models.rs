use crate::core::MoveOutcome;

pub struct GameRenderState {
    pub stage: usize,
    pub stage_count: usize,
    pub won: bool,
    pub last_change: Option<MoveOutcome>,
}
