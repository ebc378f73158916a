use hop_engine::input::keys::{KEY_D, KEY_SPACE};
use hop_engine::InputEvent;

/// Key events to inject at given frame numbers, for headless runs.
#[derive(Debug, Clone, Default)]
pub struct Script {
    steps: Vec<(u64, InputEvent)>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        self.steps.push((frame, event));
        self
    }

    /// Run right, hop, release early, stop.
    pub fn demo() -> Self {
        Self::new()
            .at(0, InputEvent::KeyDown { key_code: KEY_D })
            .at(2, InputEvent::KeyDown { key_code: KEY_SPACE })
            .at(6, InputEvent::KeyUp { key_code: KEY_SPACE })
            .at(9, InputEvent::KeyUp { key_code: KEY_D })
    }

    pub fn events_at(&self, frame: u64) -> impl Iterator<Item = InputEvent> + '_ {
        self.steps
            .iter()
            .filter(move |(f, _)| *f == frame)
            .map(|(_, event)| *event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_grouped_by_frame() {
        let script = Script::new()
            .at(1, InputEvent::KeyDown { key_code: 1 })
            .at(1, InputEvent::KeyDown { key_code: 2 })
            .at(3, InputEvent::KeyUp { key_code: 1 });
        assert_eq!(script.events_at(0).count(), 0);
        assert_eq!(
            script.events_at(1).collect::<Vec<_>>(),
            vec![
                InputEvent::KeyDown { key_code: 1 },
                InputEvent::KeyDown { key_code: 2 },
            ]
        );
        assert_eq!(script.events_at(3).count(), 1);
    }
}
