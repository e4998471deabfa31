//! World switching
//!
//! Tracks which world (and therefore which player and camera) is current,
//! and fires teleports when the current player steps into a pad. A cooldown
//! after every teleport keeps the player from bouncing straight back.

use crate::context::WorldContext;
use crate::player::PlayerRoster;
use crate::teleport::{TeleportZone, TeleportZoneRegistry};
use crate::world_id::WorldId;

/// Default re-entry cooldown in seconds
pub const DEFAULT_TELEPORT_COOLDOWN: f32 = 2.0;

/// Record of a fired teleport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeleportEvent {
    /// Name of the zone that fired
    pub zone: String,
    pub from: WorldId,
    pub to: WorldId,
}

/// Current world plus the teleport cooldown
#[derive(Debug, Clone)]
pub struct WorldSwitcher {
    current: WorldId,
    cooldown_remaining: f32,
    cooldown_duration: f32,
}

impl Default for WorldSwitcher {
    fn default() -> Self {
        Self::new(WorldId::Labo, DEFAULT_TELEPORT_COOLDOWN)
    }
}

impl WorldSwitcher {
    /// Start in `current` with no cooldown pending
    pub fn new(current: WorldId, cooldown_duration: f32) -> Self {
        Self {
            current,
            cooldown_remaining: 0.0,
            cooldown_duration: cooldown_duration.max(0.0),
        }
    }

    pub fn current(&self) -> WorldId {
        self.current
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    pub fn cooldown_duration(&self) -> f32 {
        self.cooldown_duration
    }

    pub fn is_on_cooldown(&self) -> bool {
        self.cooldown_remaining > 0.0
    }

    /// Tick the cooldown and, once it has run out, check the pads
    ///
    /// At most one teleport fires per call: the first matching zone in
    /// registry order wins.
    pub fn update(
        &mut self,
        players: &mut PlayerRoster,
        zones: &TeleportZoneRegistry,
        ctx: &mut WorldContext,
        delta: f32,
    ) -> Option<TeleportEvent> {
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining = (self.cooldown_remaining - delta.max(0.0)).max(0.0);
            if self.cooldown_remaining > 0.0 {
                return None;
            }
            log::debug!("Teleport cooldown elapsed");
        }

        let player = players.get(self.current)?;
        let position = match player.position(&ctx.physics) {
            Some(position) => position,
            None => {
                log::warn!("{} player has no body; skipping teleport checks", self.current);
                return None;
            }
        };
        let world = player.world();

        for zone in zones.zones() {
            if !players.contains(zone.destination) {
                continue;
            }
            if zone.triggers(world, position) {
                return Some(self.teleport(zone, players, ctx));
            }
        }
        None
    }

    fn teleport(&mut self, zone: &TeleportZone, players: &mut PlayerRoster, ctx: &mut WorldContext) -> TeleportEvent {
        let from = self.current;
        let to = zone.destination;

        if let Some(outgoing) = players.get_mut(from) {
            if let Err(e) = outgoing.set_enabled(&mut ctx.physics, false) {
                log::warn!("Failed to disable {} player: {}", from, e);
            }
        }

        let mut incoming_key = None;
        if let Some(incoming) = players.get_mut(to) {
            if let Err(e) = incoming.set_enabled(&mut ctx.physics, true) {
                log::warn!("Failed to enable {} player: {}", to, e);
            }
            incoming_key = Some(incoming.body().key());
        }

        self.current = to;

        match (to, incoming_key) {
            (WorldId::Zaranthis, Some(key)) => {
                ctx.cameras.activate_follow(key);
                log::info!("Camera switched to follow {} player", to);
            }
            _ => {
                ctx.cameras.activate_free();
                log::info!("Camera switched to free camera");
            }
        }

        self.cooldown_remaining = self.cooldown_duration;

        debug_assert_eq!(players.enabled_count(), 1, "exactly one player must be enabled");
        debug_assert!(self.cooldown_remaining >= 0.0);

        log::info!("Teleported {} -> {} via '{}'", from, to, zone.name);
        TeleportEvent {
            zone: zone.name.clone(),
            from,
            to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationBank;
    use crate::camera::{CameraKind, CameraRig};
    use crate::player::{MovementSettings, PlayerController};
    use zaranthis_math::Vec3;
    use zaranthis_physics::{PhysicsMaterial, PhysicsWorld, PlayerBody, PlayerBodyDesc, StaticCollider};

    const LABO_PAD: Vec3 = Vec3::new(-4.0, 0.9, -2.0);
    const ZARANTHIS_PAD: Vec3 = Vec3::new(504.0, 0.9, 500.0);

    struct Fixture {
        ctx: WorldContext,
        players: PlayerRoster,
        zones: TeleportZoneRegistry,
        switcher: WorldSwitcher,
    }

    fn fixture(labo_spawn: Vec3, zaranthis_spawn: Vec3) -> Fixture {
        let mut physics = PhysicsWorld::new();
        physics.add_static_collider(StaticCollider::floor(0.0, PhysicsMaterial::GROUND));

        let settings = MovementSettings::default();
        let mut players = PlayerRoster::new();
        for (world, spawn) in [(WorldId::Labo, labo_spawn), (WorldId::Zaranthis, zaranthis_spawn)] {
            let mut body = PlayerBody::attach(&mut physics, spawn, PlayerBodyDesc::default());
            body.configure_mass_properties(&mut physics).unwrap();
            players.insert(PlayerController::new(world, body, AnimationBank::standard(), &settings));
        }
        players
            .get_mut(WorldId::Zaranthis)
            .unwrap()
            .set_enabled(&mut physics, false)
            .unwrap();

        let mut zones = TeleportZoneRegistry::new();
        zones
            .register(TeleportZone::new("labo_gate", LABO_PAD, WorldId::Labo, WorldId::Zaranthis))
            .unwrap();
        zones
            .register(TeleportZone::new("zaranthis_gate", ZARANTHIS_PAD, WorldId::Zaranthis, WorldId::Labo))
            .unwrap();

        Fixture {
            ctx: WorldContext::new(physics, CameraRig::default()),
            players,
            zones,
            switcher: WorldSwitcher::default(),
        }
    }

    impl Fixture {
        fn update(&mut self, delta: f32) -> Option<TeleportEvent> {
            self.switcher.update(&mut self.players, &self.zones, &mut self.ctx, delta)
        }
    }

    #[test]
    fn test_fires_inside_radius() {
        let mut f = fixture(LABO_PAD + Vec3::new(1.0, 0.0, 0.0), Vec3::new(500.0, 0.9, 500.0));

        let event = f.update(0.016).unwrap();
        assert_eq!(
            event,
            TeleportEvent {
                zone: "labo_gate".to_string(),
                from: WorldId::Labo,
                to: WorldId::Zaranthis,
            }
        );
        assert_eq!(f.switcher.current(), WorldId::Zaranthis);
        assert_eq!(f.switcher.cooldown_remaining(), DEFAULT_TELEPORT_COOLDOWN);
        assert!(!f.players.get(WorldId::Labo).unwrap().is_enabled());
        assert!(f.players.get(WorldId::Zaranthis).unwrap().is_enabled());
        assert_eq!(f.ctx.cameras.active_kind(), CameraKind::Follow);
        assert_eq!(
            f.ctx.cameras.active().locked_target(),
            Some(f.players.get(WorldId::Zaranthis).unwrap().body().key())
        );
    }

    #[test]
    fn test_does_not_fire_outside_radius() {
        let mut f = fixture(LABO_PAD + Vec3::new(1.6, 0.0, 0.0), Vec3::new(500.0, 0.9, 500.0));
        assert!(f.update(0.016).is_none());
        assert_eq!(f.switcher.current(), WorldId::Labo);
        assert_eq!(f.ctx.cameras.active_kind(), CameraKind::Free);
    }

    #[test]
    fn test_cooldown_blocks_reentry() {
        // Zaranthis player spawns right on the return pad
        let mut f = fixture(LABO_PAD, ZARANTHIS_PAD);
        assert!(f.update(0.016).is_some());

        let mut last = f.switcher.cooldown_remaining();
        for _ in 0..19 {
            assert!(f.update(0.1).is_none());
            let cooldown = f.switcher.cooldown_remaining();
            assert!(cooldown < last);
            assert!((last - cooldown - 0.1).abs() < 0.0001);
            last = cooldown;
        }
        assert_eq!(f.switcher.current(), WorldId::Zaranthis);

        // Cooldown runs out; the return pad fires on the same tick
        let event = f.update(0.2).unwrap();
        assert_eq!(event.to, WorldId::Labo);
        assert_eq!(f.ctx.cameras.active_kind(), CameraKind::Free);
        assert!(f.players.get(WorldId::Labo).unwrap().is_enabled());
    }

    #[test]
    fn test_cooldown_clamps_at_zero() {
        let mut f = fixture(LABO_PAD, Vec3::new(450.0, 0.9, 450.0));
        f.update(0.016);
        f.update(10.0);
        assert_eq!(f.switcher.cooldown_remaining(), 0.0);
        assert!(!f.switcher.is_on_cooldown());
    }

    #[test]
    fn test_wrong_world_zone_ignored() {
        // Labo player standing on the Zaranthis pad's coordinates
        let mut f = fixture(ZARANTHIS_PAD, Vec3::new(450.0, 0.9, 450.0));
        assert!(f.update(0.016).is_none());
        assert_eq!(f.switcher.current(), WorldId::Labo);
    }

    #[test]
    fn test_missing_destination_player_skips_zone() {
        let mut physics = PhysicsWorld::new();
        physics.add_static_collider(StaticCollider::floor(0.0, PhysicsMaterial::GROUND));
        let mut body = PlayerBody::attach(&mut physics, LABO_PAD, PlayerBodyDesc::default());
        body.configure_mass_properties(&mut physics).unwrap();

        let mut players = PlayerRoster::new();
        players.insert(PlayerController::new(
            WorldId::Labo,
            body,
            AnimationBank::standard(),
            &MovementSettings::default(),
        ));
        let mut zones = TeleportZoneRegistry::new();
        zones
            .register(TeleportZone::new("labo_gate", LABO_PAD, WorldId::Labo, WorldId::Zaranthis))
            .unwrap();
        let mut ctx = WorldContext::new(physics, CameraRig::default());
        let mut switcher = WorldSwitcher::default();

        assert!(switcher.update(&mut players, &zones, &mut ctx, 0.016).is_none());
        assert_eq!(switcher.current(), WorldId::Labo);
    }

    #[test]
    fn test_disabled_body_frozen_after_switch() {
        let mut f = fixture(LABO_PAD, Vec3::new(450.0, 0.9, 450.0));
        f.update(0.016);

        let labo = f.players.get(WorldId::Labo).unwrap();
        let before = labo.position(&f.ctx.physics).unwrap();
        f.ctx.physics.step(0.5);
        assert_eq!(labo.position(&f.ctx.physics).unwrap(), before);
    }
}
