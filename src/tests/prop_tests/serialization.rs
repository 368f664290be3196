use crate::game::PacmanGameState;

use super::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn game_state_serialize_json((gs, _) in arb_reachable_game_state()) {
        let ser = serde_json::to_string_pretty(&gs).unwrap();
        let gs1: PacmanGameState = serde_json::from_str(&ser).unwrap();
        assert_eq!(gs, gs1);
    }

    #[test]
    fn layout_serialize_json(text in arb_layout_text()) {
        let layout: Layout = text.parse().unwrap();
        let ser = serde_json::to_string(&layout).unwrap();
        let layout1: Layout = serde_json::from_str(&ser).unwrap();
        assert_eq!(layout, layout1);
    }
}
