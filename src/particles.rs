//! Drifting weather particles for the seasonal canvas backdrop.
//!
//! Pure data and update logic only: spawning, per-frame advancement, and
//! recycling live here so they can be exercised on the host, while canvas
//! drawing stays in the application shell.

use rand::Rng;

use crate::Season;

/// Vertical slack beyond the canvas edges where particles keep existing:
/// fresh spawns enter this far above the top, and a particle is recycled
/// once it has fallen this far below the bottom.
pub const RESPAWN_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Petal,
    Leaf,
}

/// Static per-season look: backdrop tint class, particle palette, shape,
/// particle count, and fall-speed multiplier.
pub struct SeasonStyle {
    pub css_class: &'static str,
    pub palette: &'static [&'static str],
    pub shape: ShapeKind,
    pub count: usize,
    pub speed: f64,
}

static SPRING: SeasonStyle = SeasonStyle {
    css_class: "season-spring",
    palette: &["#ffb7b2", "#ffdac1", "#ff9aa2"],
    shape: ShapeKind::Petal,
    count: 40,
    speed: 1.0,
};

static SUMMER: SeasonStyle = SeasonStyle {
    css_class: "season-summer",
    palette: &["#b5ead7", "#a0e8af", "#76c893"],
    shape: ShapeKind::Leaf,
    count: 30,
    speed: 1.2,
};

static AUTUMN: SeasonStyle = SeasonStyle {
    css_class: "season-autumn",
    palette: &["#ff9aa2", "#e2f0cb", "#ffcc80", "#d35d6e"],
    shape: ShapeKind::Leaf,
    count: 35,
    speed: 0.9,
};

static WINTER: SeasonStyle = SeasonStyle {
    css_class: "season-winter",
    palette: &["#ffffff", "#eef2f3"],
    shape: ShapeKind::Circle,
    count: 60,
    speed: 0.7,
};

impl SeasonStyle {
    pub fn of(season: Season) -> &'static SeasonStyle {
        match season {
            Season::Spring => &SPRING,
            Season::Summer => &SUMMER,
            Season::Autumn => &AUTUMN,
            Season::Winter => &WINTER,
        }
    }
}

/// A single drifting visual element in canvas pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    /// Degrees; wraps freely, never normalized.
    pub rotation: f64,
    pub rotation_speed: f64,
    pub color: &'static str,
    pub shape: ShapeKind,
}

impl Particle {
    /// Spawn a particle for the given style. `scatter` places it anywhere
    /// on the canvas; otherwise it enters just above the top edge.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        style: &SeasonStyle,
        width: f64,
        height: f64,
        scatter: bool,
    ) -> Self {
        Particle {
            x: rng.random_range(0.0..width.max(1.0)),
            y: if scatter {
                rng.random_range(0.0..height.max(1.0))
            } else {
                -RESPAWN_MARGIN
            },
            vx: rng.random_range(-0.75..0.75),
            vy: rng.random_range(0.5..1.5) * style.speed,
            size: rng.random_range(5.0..10.0),
            rotation: rng.random_range(0.0..360.0),
            rotation_speed: rng.random_range(-1.0..1.0),
            color: style.palette[rng.random_range(0..style.palette.len())],
            shape: style.shape,
        }
    }

    /// Advance one animation frame: fall, spin, and drift sideways on a
    /// wind oscillation keyed to the particle's height.
    pub fn step(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.rotation += self.rotation_speed;
        self.x += (self.y * 0.02).sin() * 0.2;
    }

    /// Whether the particle has fallen past the recycling line.
    pub fn below_floor(&self, height: f64) -> bool {
        self.y > height + RESPAWN_MARGIN
    }
}

/// Fixed-count particle set owned by the seasonal backdrop.
///
/// The set is rebuilt wholesale on season change or surface resize so the
/// new look appears instantly populated; individual particles are recycled
/// one at a time as they leave the visible area.
pub struct ParticleField {
    season: Season,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(season: Season, width: f64, height: f64, rng: &mut R) -> Self {
        let mut field = ParticleField {
            season,
            width,
            height,
            particles: Vec::new(),
        };
        field.populate(rng);
        field
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Swap the active season and rebuild the whole set, scattered over the
    /// full canvas rather than phasing in from the top.
    pub fn set_season<R: Rng + ?Sized>(&mut self, season: Season, rng: &mut R) {
        if self.season != season {
            self.season = season;
            self.populate(rng);
        }
    }

    /// Track a resized drawing surface and rebuild against the new bounds.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.populate(rng);
    }

    fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let style = SeasonStyle::of(self.season);
        self.particles = (0..style.count)
            .map(|_| Particle::spawn(rng, style, self.width, self.height, true))
            .collect();
    }

    /// Advance every particle one frame, recycling those that fell below
    /// the visible area as fresh spawns entering from the top.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let style = SeasonStyle::of(self.season);
        for particle in &mut self.particles {
            particle.step();
            if particle.below_floor(self.height) {
                *particle = Particle::spawn(rng, style, self.width, self.height, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn style_table_matches_the_seasonal_presets() {
        assert_eq!(SeasonStyle::of(Season::Spring).speed, 1.0);
        assert_eq!(SeasonStyle::of(Season::Summer).speed, 1.2);
        assert_eq!(SeasonStyle::of(Season::Autumn).speed, 0.9);
        assert_eq!(SeasonStyle::of(Season::Winter).speed, 0.7);
        assert!(!SeasonStyle::of(Season::Winter).palette.is_empty());
    }

    #[test]
    fn field_matches_the_seasonal_count_and_shape() {
        let mut rng = rng();
        for (season, count, shape) in [
            (Season::Spring, 40, ShapeKind::Petal),
            (Season::Summer, 30, ShapeKind::Leaf),
            (Season::Autumn, 35, ShapeKind::Leaf),
            (Season::Winter, 60, ShapeKind::Circle),
        ] {
            let field = ParticleField::new(season, 800.0, 600.0, &mut rng);
            assert_eq!(field.particles().len(), count);
            assert!(field.particles().iter().all(|p| p.shape == shape));
        }
    }

    #[test]
    fn new_field_scatters_across_the_full_canvas() {
        let mut rng = rng();
        let field = ParticleField::new(Season::Spring, 800.0, 600.0, &mut rng);
        assert!(field
            .particles()
            .iter()
            .all(|p| (0.0..800.0).contains(&p.x) && (0.0..600.0).contains(&p.y)));
    }

    #[test]
    fn step_advances_position_rotation_and_wind_drift() {
        let mut particle = Particle {
            x: 100.0,
            y: 50.0,
            vx: 1.0,
            vy: 2.0,
            size: 6.0,
            rotation: 10.0,
            rotation_speed: 0.5,
            color: "#ffffff",
            shape: ShapeKind::Circle,
        };
        particle.step();
        assert_eq!(particle.y, 52.0);
        assert_eq!(particle.rotation, 10.5);
        let drift = (52.0_f64 * 0.02).sin() * 0.2;
        assert!((particle.x - (101.0 + drift)).abs() < 1e-12);
    }

    #[test]
    fn fallen_particles_respawn_at_the_top() {
        let mut rng = rng();
        let mut field = ParticleField::new(Season::Autumn, 800.0, 600.0, &mut rng);
        field.particles[0].y = 600.0 + RESPAWN_MARGIN + 1.0;
        field.particles[0].color = "#000000"; // not in any palette

        field.step(&mut rng);

        let recycled = &field.particles()[0];
        assert_eq!(recycled.y, -RESPAWN_MARGIN);
        assert!(SeasonStyle::of(Season::Autumn)
            .palette
            .contains(&recycled.color));
        assert!(recycled.vy > 0.0);
    }

    #[test]
    fn particles_above_the_floor_survive_a_step() {
        let mut rng = rng();
        let mut field = ParticleField::new(Season::Winter, 800.0, 600.0, &mut rng);
        field.particles[3].y = 10.0;
        let color = field.particles[3].color;

        field.step(&mut rng);

        let survivor = &field.particles()[3];
        assert!(survivor.y > 10.0);
        assert_eq!(survivor.color, color);
    }

    #[test]
    fn season_change_reinitializes_the_full_set() {
        let mut rng = rng();
        let mut field = ParticleField::new(Season::Spring, 800.0, 600.0, &mut rng);
        field.set_season(Season::Winter, &mut rng);

        assert_eq!(field.season(), Season::Winter);
        assert_eq!(field.particles().len(), 60);
        assert!(field.particles().iter().all(|p| p.shape == ShapeKind::Circle));
        let palette = SeasonStyle::of(Season::Winter).palette;
        assert!(field.particles().iter().all(|p| palette.contains(&p.color)));
    }

    #[test]
    fn setting_the_same_season_keeps_the_current_set() {
        let mut rng = rng();
        let mut field = ParticleField::new(Season::Spring, 800.0, 600.0, &mut rng);
        let before: Vec<Particle> = field.particles().to_vec();
        field.set_season(Season::Spring, &mut rng);
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn resize_rebuilds_against_new_bounds() {
        let mut rng = rng();
        let mut field = ParticleField::new(Season::Summer, 800.0, 600.0, &mut rng);
        field.resize(200.0, 100.0, &mut rng);
        assert_eq!(field.particles().len(), 30);
        assert!(field
            .particles()
            .iter()
            .all(|p| (0.0..200.0).contains(&p.x) && (0.0..100.0).contains(&p.y)));
    }
}
