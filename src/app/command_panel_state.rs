use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandTarget {
    /// The `curl` PATCH request.
    Http,
    /// The `doctl` invocation.
    Cli,
}

impl CommandTarget {
    pub fn title(self) -> &'static str {
        match self {
            CommandTarget::Http => "curl",
            CommandTarget::Cli => "doctl",
        }
    }
}

/// "Copied!" acknowledgement per command. Each target expires independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPanelState {
    http_feedback_expires: Option<Instant>,
    cli_feedback_expires: Option<Instant>,
}

impl CommandPanelState {
    pub const FEEDBACK_TIMEOUT: Duration = Duration::from_millis(2000);

    fn slot(&mut self, target: CommandTarget) -> &mut Option<Instant> {
        match target {
            CommandTarget::Http => &mut self.http_feedback_expires,
            CommandTarget::Cli => &mut self.cli_feedback_expires,
        }
    }

    fn expires(&self, target: CommandTarget) -> Option<Instant> {
        match target {
            CommandTarget::Http => self.http_feedback_expires,
            CommandTarget::Cli => self.cli_feedback_expires,
        }
    }

    pub fn mark_copied_at(&mut self, target: CommandTarget, now: Instant) {
        *self.slot(target) = Some(now + Self::FEEDBACK_TIMEOUT);
    }

    pub fn is_copied_visible_at(&self, target: CommandTarget, now: Instant) -> bool {
        self.expires(target).is_some_and(|expires| now < expires)
    }

    pub fn clear_expired_feedback_at(&mut self, now: Instant) {
        for target in [CommandTarget::Http, CommandTarget::Cli] {
            let slot = self.slot(target);
            if let Some(expires) = *slot
                && expires <= now
            {
                *slot = None;
            }
        }
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        match (self.http_feedback_expires, self.cli_feedback_expires) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod feedback {
        use super::*;

        #[rstest]
        #[case(CommandTarget::Http)]
        #[case(CommandTarget::Cli)]
        fn visible_immediately_and_gone_after_timeout(#[case] target: CommandTarget) {
            let mut state = CommandPanelState::default();
            let now = Instant::now();

            state.mark_copied_at(target, now);

            assert!(state.is_copied_visible_at(target, now));
            assert!(state.is_copied_visible_at(target, now + Duration::from_millis(1999)));
            assert!(!state.is_copied_visible_at(target, now + Duration::from_millis(2000)));
        }

        #[test]
        fn targets_are_independent() {
            let mut state = CommandPanelState::default();
            let now = Instant::now();

            state.mark_copied_at(CommandTarget::Http, now);
            state.mark_copied_at(CommandTarget::Cli, now + Duration::from_millis(1500));

            let later = now + Duration::from_millis(2500);
            assert!(!state.is_copied_visible_at(CommandTarget::Http, later));
            assert!(state.is_copied_visible_at(CommandTarget::Cli, later));
        }

        #[test]
        fn copying_one_target_leaves_the_other_untouched() {
            let mut state = CommandPanelState::default();
            let now = Instant::now();

            state.mark_copied_at(CommandTarget::Cli, now);

            assert!(!state.is_copied_visible_at(CommandTarget::Http, now));
        }

        #[test]
        fn recopy_restarts_the_timer() {
            let mut state = CommandPanelState::default();
            let now = Instant::now();

            state.mark_copied_at(CommandTarget::Http, now);
            state.mark_copied_at(CommandTarget::Http, now + Duration::from_millis(1000));

            assert!(
                state.is_copied_visible_at(CommandTarget::Http, now + Duration::from_millis(2500))
            );
        }
    }

    mod clear_expired {
        use super::*;

        #[test]
        fn clears_only_expired_targets() {
            let mut state = CommandPanelState::default();
            let now = Instant::now();
            state.mark_copied_at(CommandTarget::Http, now);
            state.mark_copied_at(CommandTarget::Cli, now + Duration::from_millis(1000));

            state.clear_expired_feedback_at(now + Duration::from_millis(2000));

            assert_eq!(
                state.next_expiry(),
                Some(now + Duration::from_millis(3000))
            );
        }

        #[test]
        fn next_expiry_is_earliest() {
            let mut state = CommandPanelState::default();
            let now = Instant::now();
            assert_eq!(state.next_expiry(), None);

            state.mark_copied_at(CommandTarget::Cli, now + Duration::from_millis(500));
            state.mark_copied_at(CommandTarget::Http, now);

            assert_eq!(state.next_expiry(), Some(now + Duration::from_millis(2000)));
        }
    }
}
