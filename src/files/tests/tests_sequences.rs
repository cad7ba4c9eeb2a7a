//! Randomised setter sequences.
//!
//! Each round applies a random mix of `set_package_id`, `set_files` and
//! `clear_files` calls and checks that the getters always report the
//! last value written, tracked independently in a shadow model.

#[cfg(test)]
mod tests {
    use crate::files::Files;
    use crate::files::tests::helpers::init_tracing;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ROUNDS: usize = 200;
    const STEPS: usize = 32;

    fn random_path(rng: &mut StdRng) -> String {
        format!(
            "/usr/share/pkg{}/file{}",
            rng.random_range(0..4),
            rng.random_range(0..8)
        )
    }

    #[test]
    fn getters_return_last_value_set() {
        init_tracing();
        let mut rng = StdRng::seed_from_u64(0x5eed_f11e);

        for _ in 0..ROUNDS {
            let mut record = Files::new();
            let mut expected_id: Option<String> = None;
            let mut expected_files: Vec<String> = Vec::new();

            for _ in 0..STEPS {
                match rng.random_range(0..4) {
                    0 => {
                        let id = format!(
                            "pkg{};1.{};noarch;local",
                            rng.random_range(0..10),
                            rng.random_range(0..10)
                        );
                        record.set_package_id(Some(&id));
                        expected_id = Some(id);
                    }
                    1 => {
                        record.set_package_id(None);
                        expected_id = None;
                    }
                    2 => {
                        let len = rng.random_range(0..6);
                        let files: Vec<String> =
                            (0..len).map(|_| random_path(&mut rng)).collect();
                        record.set_files(&files);
                        expected_files = files;
                    }
                    _ => {
                        record.clear_files();
                        expected_files.clear();
                    }
                }

                assert_eq!(record.package_id(), expected_id.as_deref());
                assert_eq!(record.files(), expected_files.as_slice());
            }
        }
    }
}
