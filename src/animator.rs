/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::time::Duration;

use crate::animator::Stage::{Cycling, Paused};
use crate::config::MuscleConfig;
use crate::muscle::Muscle;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Paused,
    Cycling(f64),
}

/// Drives a muscle back and forth between extended and contracted
pub struct Animator {
    step: f64,
    tick: Duration,
    stage: Stage,
}

impl Animator {
    pub fn new(config: &MuscleConfig) -> Self {
        Self {
            step: config.animation_step.abs(),
            tick: Duration::from_millis(config.tick_millis),
            stage: Paused,
        }
    }

    /// Time between steps for a driver that runs on a timer
    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn is_running(&self) -> bool {
        matches!(self.stage, Cycling(_))
    }

    /// Begin contracting. Restarting a running animation starts over in
    /// the contracting direction.
    pub fn start(&mut self) {
        self.stage = Cycling(self.step);
    }

    pub fn stop(&mut self) {
        self.stage = Paused;
    }

    pub fn reset(&mut self, muscle: &mut Muscle) {
        self.stage = Paused;
        muscle.set_contraction(0.0);
    }

    /// Advance one tick, turning around at either end
    pub fn step(&mut self, muscle: &mut Muscle) {
        self.stage = match self.stage {
            Paused => Paused,
            Cycling(increment) => {
                let ratio = muscle.contraction_ratio() + increment;
                if ratio >= 1.0 {
                    muscle.set_contraction(1.0);
                    Cycling(-increment.abs())
                } else if ratio <= 0.0 {
                    muscle.set_contraction(0.0);
                    Cycling(increment.abs())
                } else {
                    muscle.set_contraction(ratio);
                    Cycling(increment)
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Animator, Muscle) {
        let config = MuscleConfig::default();
        (Animator::new(&config), Muscle::new(&config).unwrap())
    }

    #[test]
    fn test_paused_does_nothing() {
        let (mut animator, mut muscle) = setup();
        animator.step(&mut muscle);
        assert_eq!(muscle.contraction_ratio(), 0.0);
        assert!(!animator.is_running());
        assert_eq!(animator.tick(), Duration::from_millis(50));
    }

    #[test]
    fn test_cycle_turns_around() {
        let (mut animator, mut muscle) = setup();
        animator.start();
        let steps_to_top = (1..=60)
            .find(|_| {
                animator.step(&mut muscle);
                muscle.contraction_ratio() == 1.0
            })
            .unwrap();
        assert!((50..=51).contains(&steps_to_top));
        animator.step(&mut muscle);
        assert!(muscle.contraction_ratio() < 1.0);
        for _ in 0..60 {
            animator.step(&mut muscle);
        }
        assert!(muscle.contraction_ratio() >= 0.0);
        assert!(animator.is_running());
    }

    #[test]
    fn test_ratio_stays_in_range() {
        let (mut animator, mut muscle) = setup();
        animator.start();
        for _ in 0..500 {
            animator.step(&mut muscle);
            let ratio = muscle.contraction_ratio();
            assert!((0.0..=1.0).contains(&ratio));
        }
    }

    #[test]
    fn test_stop_and_reset() {
        let (mut animator, mut muscle) = setup();
        animator.start();
        animator.step(&mut muscle);
        animator.stop();
        let held = muscle.contraction_ratio();
        animator.step(&mut muscle);
        assert_eq!(muscle.contraction_ratio(), held);
        animator.start();
        animator.step(&mut muscle);
        animator.reset(&mut muscle);
        assert_eq!(muscle.contraction_ratio(), 0.0);
        assert!(!animator.is_running());
    }
}
