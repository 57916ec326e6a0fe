use rand::{Rng, seq::IndexedRandom};

const PATHS: [(&str, u8); 7] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/splash", 20),
    ("/gallery", 10),
    ("/help_page/1", 15),
];

// Tokens that look like addresses but never parse as one
const BAD_IPS: [(&str, u8); 5] = [
    ("256.256.256.256", 5),
    ("10.0.0", 5),
    ("1.2.3.4.5", 2),
    ("95.741.380.304", 5),
    ("not-an-ip", 2),
];

const IPV6_SHARE: f64 = 0.2;

pub fn generate_log_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let ip = if rng.random_bool(IPV6_SHARE) {
        generate_ipv6(rng)
    } else {
        generate_ipv4(rng)
    };
    format!("{path} {ip}")
}

pub fn generate_invalid_log_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let ip = BAD_IPS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    format!("{path} {ip}")
}

fn generate_ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "192.168.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256)
    )
}

fn generate_ipv6<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "2001:db8::{:x}:{:x}",
        rng.random_range(0..0x1_0000),
        rng.random_range(0..0x1_0000)
    )
}
