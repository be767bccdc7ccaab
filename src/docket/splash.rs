use rand::Rng;

/// Fixed pool of post-login splash messages. Focused on accountability,
/// consequences, and justice; reproduced verbatim.
pub const SPLASH_MESSAGES: &[&str] = &[
    "Send him to jail.",
    "No meant no.",
    "He will pay for what he did.",
    "Don't stop until he is in cuffs.",
    "His freedom ends when justice begins.",
    "Every stalker belongs behind bars.",
    "He thought he could get away with it. He was wrong.",
    "Document. Report. Prosecute. Repeat.",
    "His mugshot is coming.",
    "Zero tolerance. Maximum consequences.",
    "He crossed the line. Now he faces the law.",
    "Stalkers don't deserve second chances.",
    "Your evidence will put him away.",
    "He made his choice. Now he gets his sentence.",
    "The cage is waiting for him.",
    "His criminal record starts now.",
    "He terrorized you. Now the system terrorizes him.",
    "Prison orange will suit him perfectly.",
    "He violated your boundaries. Now he loses his freedom.",
    "Every text, every call, every threat\u{2014}all evidence for his conviction.",
    "His intimidation ends. Your justice begins.",
    "He thought he was untouchable. The law disagrees.",
    "Restraining orders are just the beginning.",
    "He'll have plenty of time to think about his actions\u{2014}in a cell.",
    "Your safety matters more than his freedom.",
    "He chose to be a predator. Society chooses to lock him up.",
    "The only place he belongs is behind bars.",
    "His harassment stops when the handcuffs click.",
];

/// Mugshot-style fallback images shown when no motivational video is set or
/// the video fails to load.
pub const MUGSHOT_IMAGES: &[&str] = &[
    "/assets/generated/mugshot-1.dim_1024x1024.png",
    "/assets/generated/mugshot-2.dim_1024x1024.png",
    "/assets/generated/mugshot-3.dim_1024x1024.png",
    "/assets/generated/mugshot-4.dim_1024x1024.png",
    "/assets/generated/mugshot-5.dim_1024x1024.png",
    "/assets/generated/mugshot-6.dim_1024x1024.png",
];

/// Uniformly random message; unseeded, repeats across calls allowed.
pub fn random_splash_message() -> &'static str {
    let mut rng = rand::rng();
    SPLASH_MESSAGES[rng.random_range(0..SPLASH_MESSAGES.len())]
}

/// Uniformly random mugshot image path; unseeded, repeats allowed.
pub fn random_mugshot_image() -> &'static str {
    let mut rng = rand::rng();
    MUGSHOT_IMAGES[rng.random_range(0..MUGSHOT_IMAGES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_have_expected_sizes() {
        assert_eq!(SPLASH_MESSAGES.len(), 28);
        assert_eq!(MUGSHOT_IMAGES.len(), 6);
    }

    #[test]
    fn selections_come_from_their_pools() {
        for _ in 0..64 {
            assert!(SPLASH_MESSAGES.contains(&random_splash_message()));
            assert!(MUGSHOT_IMAGES.contains(&random_mugshot_image()));
        }
    }
}
