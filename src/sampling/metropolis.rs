use rand::Rng;

/// Boltzmann acceptance probability for an energy change, with k_B = 1.
#[inline]
pub fn acceptance_probability(delta_e: f64, temperature: f64) -> f64 {
    if delta_e <= 0.0 {
        1.0
    } else {
        (-delta_e / temperature).exp()
    }
}

/// Metropolis criterion. Moves that do not raise the energy are always
/// accepted and consume no random number; uphill moves draw one uniform
/// number in [0, 1) and are accepted if it falls below exp(-ΔE / T).
pub fn metropolis_accept<R: Rng + ?Sized>(delta_e: f64, temperature: f64, rng: &mut R) -> bool {
    if delta_e <= 0.0 {
        return true;
    }
    rng.gen::<f64>() < acceptance_probability(delta_e, temperature)
}
