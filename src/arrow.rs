use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum ArrowCode {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowCode {
    pub const ALL: [ArrowCode; 4] = [
        ArrowCode::Up,
        ArrowCode::Down,
        ArrowCode::Left,
        ArrowCode::Right,
    ];

    pub fn arrow(self) -> Arrow {
        match self {
            ArrowCode::Up => ARROWS[0],
            ArrowCode::Down => ARROWS[1],
            ArrowCode::Left => ARROWS[2],
            ArrowCode::Right => ARROWS[3],
        }
    }
}

/// A directional symbol the player can be asked to type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arrow {
    pub code: ArrowCode,
    pub label: &'static str,
}

pub const ARROWS: [Arrow; 4] = [
    Arrow {
        code: ArrowCode::Up,
        label: "↑",
    },
    Arrow {
        code: ArrowCode::Down,
        label: "↓",
    },
    Arrow {
        code: ArrowCode::Left,
        label: "←",
    },
    Arrow {
        code: ArrowCode::Right,
        label: "→",
    },
];

/// Uniform draw over the catalog. The previous pick is not excluded.
pub fn random_arrow<R: Rng + ?Sized>(rng: &mut R) -> Arrow {
    ARROWS[rng.gen_range(0..ARROWS.len())]
}
