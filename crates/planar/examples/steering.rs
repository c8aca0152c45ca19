//! Seek-and-arrive steering with speed clamping.
//!
//! Usage:
//!   cargo run -p planar --example steering -- [steps]
//!
//! Prints the agent position each step as it chases a target that orbits the origin.

use planar::prelude::*;

fn main() {
    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let dt = 0.1;
    let max_speed = 3.0;
    let mut pos = Vector::ZERO;
    let mut vel = Vector::ZERO;
    let mut target = vector(5.0, 0.0);

    for step in 0..steps {
        target.rotate_inplace(0.2);
        let desired = (target - pos).normalized() * max_speed;
        vel += (desired - vel) * 0.5;
        vel.trim_inplace(max_speed);
        pos += vel * dt;
        let (heading, speed) = vel.to_polar();
        println!(
            "{step:>3} pos={pos} dist={:.3} heading={:.3} speed={:.3}",
            Vector::dist(pos, target),
            heading,
            speed
        );
    }
}
