use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, step, AutoTrack, Ball, Config, ConfigError, Cue, Events, Field,
    GameRng, MatchState, Paddle, PaddleInput, Params, PlayerControlled, Side, SoundBank,
};

/// Match phase; pausing is handled outside and just withholds ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Owns every entity and drives them one tick at a time
pub struct Simulation {
    world: World,
    field: Field,
    config: Config,
    match_state: MatchState,
    events: Events,
    rng: GameRng,
    sounds: SoundBank,
    player: Entity,
    opponent: Entity,
    ball: Entity,
}

impl Simulation {
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let field = Field::new(config.field_width, config.field_height);
        let mut world = World::new();

        let player = world.spawn((Paddle::at_start(&config, Side::Left), PlayerControlled));
        let policy = AutoTrack {
            max_step: config.ai_max_step,
            error: config.ai_error,
        };
        let opponent = world.spawn((Paddle::at_start(&config, Side::Right), policy));

        let serve = Vec2::new(
            rng.pick(&Params::BALL_SERVE_VX),
            rng.pick(&Params::BALL_SERVE_VY),
        );
        let ball = create_ball(&mut world, &config, field.center(), serve);

        tracing::info!(
            width = field.width,
            height = field.height,
            win_target = config.win_target,
            "simulation ready"
        );

        Ok(Self {
            world,
            field,
            match_state: MatchState::new(config.win_target),
            config,
            events: Events::new(),
            rng,
            sounds: SoundBank::silent(),
            player,
            opponent,
            ball,
        })
    }

    /// Attach sound effects; cues without a sound stay silent
    pub fn with_sounds(mut self, sounds: SoundBank) -> Self {
        self.sounds = sounds;
        self
    }

    /// Advance one tick and play the cues it raised
    pub fn tick(&mut self, input: PaddleInput) {
        step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.match_state,
            &mut self.events,
            &mut self.rng,
            input,
        );

        if self.events.ball_hit_wall {
            self.sounds.play(Cue::WallHit);
        }
        if self.events.ball_hit_paddle {
            self.sounds.play(Cue::PaddleHit);
        }
        if self.events.scored() {
            self.sounds.play(Cue::Score);
        }
    }

    /// Start a fresh match toward `win_target` points (raised to at least 1)
    pub fn new_match(&mut self, win_target: u32) {
        if win_target == 0 {
            tracing::warn!("win target 0 requested, using 1");
        }
        self.match_state.restart(win_target);

        let start_y = self.config.paddle_start_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.pos.y = start_y;
        }

        let center = self.field.center();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = center;
            // Alternate the serve across matches
            ball.vel.x = -ball.vel.x;
            if ball.vel.y == 0.0 {
                ball.vel.y = Params::BALL_SERVE_VY[1];
            }
        }

        self.events.clear();
        tracing::info!(win_target = self.match_state.win_target, "new match");
    }

    pub fn phase(&self) -> Phase {
        if self.match_state.game_over {
            Phase::GameOver
        } else {
            Phase::Playing
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase() == Phase::GameOver
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// Events raised by the last tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn player(&self) -> Option<Paddle> {
        self.paddle(self.player)
    }

    pub fn opponent(&self) -> Option<Paddle> {
        self.paddle(self.opponent)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    fn paddle(&self, entity: Entity) -> Option<Paddle> {
        self.world.get::<&Paddle>(entity).ok().map(|p| *p)
    }

    /// Direct access for front ends and tests that stage positions
    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }

    pub fn player_mut(&mut self) -> Option<hecs::RefMut<'_, Paddle>> {
        self.world.get::<&mut Paddle>(self.player).ok()
    }

    pub fn opponent_mut(&mut self) -> Option<hecs::RefMut<'_, Paddle>> {
        self.world.get::<&mut Paddle>(self.opponent).ok()
    }

    pub fn match_state_mut(&mut self) -> &mut MatchState {
        &mut self.match_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn simulation() -> Simulation {
        Simulation::new(Config::new(), GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_initial_layout() {
        let sim = simulation();
        let player = sim.player().unwrap();
        let opponent = sim.opponent().unwrap();
        let ball = sim.ball().unwrap();

        assert_eq!(player.pos, Vec2::new(10.0, 220.0));
        assert_eq!(opponent.pos, Vec2::new(940.0, 220.0));
        assert_eq!(ball.pos, Vec2::new(480.0, 270.0));
        assert_eq!(ball.spawn, ball.pos);
        assert!(Params::BALL_SERVE_VX.contains(&ball.vel.x));
        assert!(Params::BALL_SERVE_VY.contains(&ball.vel.y));
        assert_eq!(sim.phase(), Phase::Playing);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            win_target: 0,
            ..Config::new()
        };
        assert!(matches!(
            Simulation::new(config, GameRng::new(1)),
            Err(ConfigError::WinTarget)
        ));
    }

    #[test]
    fn test_tick_moves_ball() {
        let mut sim = simulation();
        let before = sim.ball().unwrap();

        sim.tick(PaddleInput::NONE);

        let after = sim.ball().unwrap();
        assert_eq!(after.pos, before.pos + before.vel);
    }

    #[test]
    fn test_new_match_resets_everything() {
        let mut sim = simulation();
        {
            let state = sim.match_state_mut();
            state.player_score = 5;
            state.opponent_score = 2;
            state.evaluate();
        }
        sim.player_mut().unwrap().pos.y = 0.0;
        sim.opponent_mut().unwrap().pos.y = 440.0;
        let vx = {
            let mut ball = sim.ball_mut().unwrap();
            ball.pos = Vec2::new(700.0, 30.0);
            ball.vel.y = 0.0;
            ball.vel.x
        };
        assert!(sim.is_game_over());

        sim.new_match(3);

        let state = sim.match_state();
        assert_eq!((state.player_score, state.opponent_score), (0, 0));
        assert_eq!(state.win_target, 3);
        assert!(!state.game_over);
        assert_eq!(sim.player().unwrap().pos.y, 220.0);
        assert_eq!(sim.opponent().unwrap().pos.y, 220.0);
        let ball = sim.ball().unwrap();
        assert_eq!(ball.pos, Vec2::new(480.0, 270.0));
        assert_eq!(ball.vel.x, -vx, "Serve should alternate across matches");
        assert_eq!(ball.vel.y, 3.0, "Zero vy should be replaced");
    }

    #[test]
    fn test_sounds_follow_events() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (wall, paddle, score) = (log.clone(), log.clone(), log.clone());
        let sounds = SoundBank::silent()
            .with_wall_hit(move || wall.borrow_mut().push(Cue::WallHit))
            .with_paddle_hit(move || paddle.borrow_mut().push(Cue::PaddleHit))
            .with_score(move || score.borrow_mut().push(Cue::Score));
        let mut sim = simulation().with_sounds(sounds);

        {
            let mut ball = sim.ball_mut().unwrap();
            ball.pos = Vec2::new(400.0, 1.0);
            ball.vel = Vec2::new(5.0, -3.0);
        }
        sim.tick(PaddleInput::NONE);
        assert_eq!(*log.borrow(), vec![Cue::WallHit]);

        {
            let mut ball = sim.ball_mut().unwrap();
            ball.pos = Vec2::new(956.0, 300.0);
            ball.vel = Vec2::new(5.0, 0.0);
        }
        sim.tick(PaddleInput::NONE);
        assert_eq!(*log.borrow(), vec![Cue::WallHit, Cue::Score]);
    }
}
