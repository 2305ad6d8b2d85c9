//! Game controller.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It owns
//! the `Uninitialized -> Initialized` lifecycle, routes every mutating call
//! to the registries or the battle resolver, and bumps the state nonce after
//! each success.
//!
//! The engine assumes a serializing executor: one call runs to completion
//! before the next begins. It performs no locking and caches nothing between
//! calls. Every precondition is checked before the first write, so a failed
//! call has no effect at all.

mod context;
mod errors;
mod query;

pub use context::CallerContext;
pub use errors::{ErrorKind, ExecuteError};
pub use query::GameQuery;

use crate::action::{Action, ActionResult};
use crate::combat::{AttackOutcome, resolve_attack};
use crate::config::GameConfig;
use crate::state::{Character, GamePhase, GameState};
use crate::stats::StatRecord;

/// Game engine that applies calls to a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Read-only view over the same state.
    pub fn query(&self) -> GameQuery<'_> {
        GameQuery::new(self.state)
    }

    /// Executes an action on behalf of `caller`.
    pub fn execute(
        &mut self,
        caller: &CallerContext,
        action: &Action,
    ) -> Result<ActionResult, ExecuteError> {
        let result = match action {
            Action::Initialize { config } => {
                self.apply_initialize(config.clone())?;
                ActionResult::Initialized {
                    config: config.clone(),
                }
            }
            Action::CreateBoss { name, stats } => {
                let stats = self.apply_create_boss(name, *stats)?;
                ActionResult::BossCreated {
                    name: name.clone(),
                    stats,
                }
            }
            Action::AppointRulingBoss { name } => {
                let previous = self.apply_appoint(name)?;
                ActionResult::RulingBossAppointed {
                    name: name.clone(),
                    previous,
                }
            }
            Action::GenerateCharacter => {
                let stats = self.apply_generate_character(caller)?.stats;
                ActionResult::CharacterGenerated {
                    actor: caller.actor().clone(),
                    stats,
                }
            }
            Action::Attack => ActionResult::BossAttacked(self.apply_attack(caller)?),
        };

        self.state.nonce += 1;
        Ok(result)
    }

    /// `Uninitialized -> Initialized`. Legal exactly once.
    pub fn initialize(&mut self, max_value: u32) -> Result<(), ExecuteError> {
        self.initialize_with(GameConfig::with_max_value(max_value))
    }

    pub fn initialize_with(&mut self, config: GameConfig) -> Result<(), ExecuteError> {
        self.execute_direct(|engine| engine.apply_initialize(config))
    }

    pub fn create_boss(&mut self, name: &str, stats: StatRecord) -> Result<StatRecord, ExecuteError> {
        self.execute_direct(|engine| engine.apply_create_boss(name, stats))
    }

    /// Returns the previously ruling boss, if any.
    pub fn appoint_ruling_boss(&mut self, name: &str) -> Result<Option<String>, ExecuteError> {
        self.execute_direct(|engine| engine.apply_appoint(name))
    }

    pub fn generate_character(&mut self, caller: &CallerContext) -> Result<Character, ExecuteError> {
        self.execute_direct(|engine| engine.apply_generate_character(caller))
    }

    pub fn attack(&mut self, caller: &CallerContext) -> Result<AttackOutcome, ExecuteError> {
        self.execute_direct(|engine| engine.apply_attack(caller))
    }

    pub fn is_ruler(&self, name: &str) -> Result<bool, ExecuteError> {
        self.query().is_ruler(name)
    }

    pub fn current_boss_health(&self) -> Result<u32, ExecuteError> {
        self.query().current_boss_health()
    }

    fn execute_direct<T>(
        &mut self,
        apply: impl FnOnce(&mut Self) -> Result<T, ExecuteError>,
    ) -> Result<T, ExecuteError> {
        let value = apply(self)?;
        self.state.nonce += 1;
        Ok(value)
    }

    fn initialized_config(&self) -> Result<GameConfig, ExecuteError> {
        self.state
            .config()
            .cloned()
            .ok_or(ExecuteError::NotInitialized)
    }

    fn apply_initialize(&mut self, config: GameConfig) -> Result<(), ExecuteError> {
        if self.state.is_initialized() {
            return Err(ExecuteError::AlreadyInitialized);
        }
        if config.max_value == 0 {
            return Err(ExecuteError::InvalidMaxValue);
        }
        self.state.phase = GamePhase::Initialized(config);
        Ok(())
    }

    fn apply_create_boss(&mut self, name: &str, stats: StatRecord) -> Result<StatRecord, ExecuteError> {
        let config = self.initialized_config()?;
        let boss = self
            .state
            .bosses
            .create_boss(name, stats, &config.boss_bounds())?;
        Ok(boss.stats)
    }

    fn apply_appoint(&mut self, name: &str) -> Result<Option<String>, ExecuteError> {
        self.initialized_config()?;
        Ok(self.state.bosses.appoint_ruling_boss(name)?)
    }

    fn apply_generate_character(&mut self, caller: &CallerContext) -> Result<Character, ExecuteError> {
        let config = self.initialized_config()?;
        let character = self
            .state
            .characters
            .generate_character(caller.actor(), &config)?;
        Ok(character.clone())
    }

    fn apply_attack(&mut self, caller: &CallerContext) -> Result<AttackOutcome, ExecuteError> {
        self.initialized_config()?;
        let state = &mut *self.state;
        Ok(resolve_attack(
            &mut state.bosses,
            &state.characters,
            caller.actor(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ActorId;

    fn caller(name: &str) -> CallerContext {
        CallerContext::new(name)
    }

    fn initialized(max_value: u32) -> GameState {
        let mut state = GameState::new();
        GameEngine::new(&mut state).initialize(max_value).unwrap();
        state
    }

    #[test]
    fn initialize_once() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);

        engine.initialize(1000).unwrap();
        let err = engine.initialize(1000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyInitialized);
        assert_eq!(state.config(), Some(&GameConfig::with_max_value(1000)));
        assert_eq!(state.nonce, 1);
    }

    #[test]
    fn zero_max_value_is_rejected() {
        let mut state = GameState::new();
        let err = GameEngine::new(&mut state).initialize(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert!(!state.is_initialized());
    }

    #[test]
    fn nothing_succeeds_before_initialize() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);
        let alice = caller("alice");

        let failures = [
            engine
                .create_boss("A", StatRecord::boss(10, 1, 1))
                .map(|_| ())
                .unwrap_err(),
            engine.appoint_ruling_boss("A").map(|_| ()).unwrap_err(),
            engine.generate_character(&alice).map(|_| ()).unwrap_err(),
            engine.attack(&alice).map(|_| ()).unwrap_err(),
            engine.is_ruler("A").map(|_| ()).unwrap_err(),
            engine.current_boss_health().map(|_| ()).unwrap_err(),
        ];
        for err in failures {
            assert_eq!(err.kind(), ErrorKind::NotInitialized);
        }
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn boss_bounds_follow_config() {
        let mut state = initialized(1000);
        let mut engine = GameEngine::new(&mut state);

        // Boss health may exceed max_value up to max_value * boss_health_scale.
        engine
            .create_boss("Diablo3", StatRecord::boss(10_000, 200, 10))
            .unwrap();

        for stats in [
            StatRecord::boss(100_001, 1, 1),
            StatRecord::boss(10, 1001, 1),
            StatRecord::boss(10, 1, 1001),
        ] {
            let err = engine.create_boss("Too Strong", stats).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        }
        assert_eq!(state.bosses.len(), 1);
    }

    #[test]
    fn failed_calls_do_not_advance_nonce() {
        let mut state = initialized(1000);
        let mut engine = GameEngine::new(&mut state);
        engine.create_boss("A", StatRecord::boss(10, 1, 1)).unwrap();
        let snapshot = state.clone();

        let mut engine = GameEngine::new(&mut state);
        assert!(engine.create_boss("A", StatRecord::boss(10, 1, 1)).is_err());
        assert!(engine.appoint_ruling_boss("B").is_err());
        assert!(engine.attack(&caller("alice")).is_err());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn execute_reports_results() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);
        let deployer = caller("deployer");
        let alice = caller("alice");

        let result = engine.execute(&deployer, &Action::initialize(1000)).unwrap();
        assert!(matches!(result, ActionResult::Initialized { .. }));

        engine
            .execute(
                &deployer,
                &Action::create_boss("Diablo3", StatRecord::character(10_000, 200, 10)),
            )
            .unwrap();
        let result = engine
            .execute(&deployer, &Action::appoint_ruling_boss("Diablo3"))
            .unwrap();
        assert_eq!(
            result,
            ActionResult::RulingBossAppointed {
                name: "Diablo3".into(),
                previous: None,
            }
        );

        let result = engine.execute(&alice, &Action::GenerateCharacter).unwrap();
        let ActionResult::CharacterGenerated { actor, stats } = result else {
            panic!("unexpected result: {result:?}");
        };
        assert_eq!(actor, ActorId::from("alice"));
        assert!(stats.validate(1000).is_ok());

        let result = engine.execute(&alice, &Action::Attack).unwrap();
        let ActionResult::BossAttacked(outcome) = result else {
            panic!("unexpected result: {result:?}");
        };
        assert_eq!(outcome.boss, "Diablo3");
        assert_eq!(outcome.defense, 10);
        assert_eq!(outcome.damage, stats.attack_power.saturating_sub(10));
        assert_eq!(state.nonce, 5);
        assert!(state.bosses.get("Diablo3").unwrap().stats.is_boss);
    }

    #[test]
    fn duplicate_character_keeps_original() {
        let mut state = initialized(1000);
        let mut engine = GameEngine::new(&mut state);
        let bob = caller("bob");

        let original = engine.generate_character(&bob).unwrap();
        let err = engine.generate_character(&bob).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateCharacter);
        assert_eq!(engine.query().character_of(bob.actor()), Ok(&original));
    }

    #[test]
    fn attack_preconditions() {
        let mut state = initialized(1000);
        let mut engine = GameEngine::new(&mut state);
        let alice = caller("alice");

        assert_eq!(engine.attack(&alice).unwrap_err().kind(), ErrorKind::NoRulingBoss);

        engine.create_boss("A", StatRecord::boss(100, 1, 1)).unwrap();
        engine.appoint_ruling_boss("A").unwrap();
        assert_eq!(
            engine.attack(&alice).unwrap_err().kind(),
            ErrorKind::UnknownCharacter
        );
        assert_eq!(engine.current_boss_health(), Ok(100));
    }
}
