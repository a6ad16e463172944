use std::time::Instant;
use ark_ff::Zero;
use ark_std::rand::Rng;
use ark_test_curves::bls12_381::{Bls12_381, Fr};
use kzg_commitments::{random_scalar, Encoder, Kzg, KzgError, Polynomial, TrustedSetup, DEFAULT_LENGTH};
use rand_core::OsRng;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), KzgError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut rng = OsRng;

    let start = Instant::now();
    let setup = TrustedSetup::<Bls12_381>::generate(DEFAULT_LENGTH, &mut rng);
    info!(elapsed = ?start.elapsed(), length = setup.len(), "generated trusted setup");

    let kzg = Kzg::new(&setup);

    evaluation_demo(&kzg, &mut rng)?;
    append_only_demo(&kzg, &mut rng)?;

    info!(elapsed = ?start.elapsed(), "done");
    Ok(())
}

fn evaluation_demo(kzg: &Kzg<Bls12_381>, rng: &mut OsRng) -> Result<(), KzgError> {
    let encoder = Encoder::<Fr>::default();
    let data = vec![0x99u8; 460];
    let encoded = encoder.encode(&data)?;

    let start = Instant::now();
    let commitment = kzg.commit(&encoded.polynomial)?;
    info!(elapsed = ?start.elapsed(), "committed to P(x)");

    let reveal_index = rng.gen_range(0..encoded.points.len());
    let point = encoded.points[reveal_index];

    let start = Instant::now();
    let proof = kzg.prove(&encoded.polynomial, &point)?;
    info!(elapsed = ?start.elapsed(), reveal_index, "proved evaluation of P(x)");

    let start = Instant::now();
    let is_valid = kzg.verify(&commitment, &proof, &point);
    info!(elapsed = ?start.elapsed(), is_valid, "verified evaluation proof");

    let mut changed_data = data;
    changed_data.push(0x88);
    let changed = encoder.encode(&changed_data)?;

    let reveal_index = rng.gen_range(0..changed.points.len());
    let changed_point = changed.points[reveal_index];
    let changed_proof = kzg.prove(&changed.polynomial, &changed_point)?;

    let start = Instant::now();
    let is_valid = kzg.verify(&commitment, &changed_proof, &changed_point);
    info!(
        elapsed = ?start.elapsed(),
        is_valid,
        reveal_index,
        "verified P'(x) proof against the commitment to P(x)",
    );

    Ok(())
}

fn append_only_demo(kzg: &Kzg<Bls12_381>, rng: &mut OsRng) -> Result<(), KzgError> {
    let mut coeffs = (1..DEFAULT_LENGTH).map(|_| random_scalar::<Fr, _>(rng)).collect::<Vec<_>>();
    coeffs.push(Fr::zero());
    let old = Polynomial::new(coeffs.clone());

    coeffs[DEFAULT_LENGTH - 1] = random_scalar(rng);
    let new = Polynomial::new(coeffs);

    let commitment_1 = kzg.commit(&old)?;
    let commitment_2 = kzg.commit(&new)?;

    let x = Fr::from(rng.gen_range(0..DEFAULT_LENGTH as u64));
    let proof = kzg.prove_append_only(&old, &new, x)?;

    let is_valid = kzg.verify_append_only(
        &commitment_1,
        &commitment_2,
        &proof.diff_commitment,
        &proof.diff_proof,
        &proof.point,
    );
    info!(is_valid, "verified append-only update");

    Ok(())
}
