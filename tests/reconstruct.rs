// tests/reconstruct.rs
// End-to-end reconstruction against share files produced at split time.
use std::{fs, path::Path};

use num_bigint::BigInt;

use shamir_recover::field;
use shamir_recover::{recover_from_file, recover_secret, Share, ShareFile};

fn load_share_file(name: &str) -> ShareFile {
    let path = Path::new("tests").join(name);
    let contents = fs::read_to_string(&path).expect("cannot read share file");
    serde_json::from_str(&contents).expect("share file JSON parse failed")
}

fn big(decimal: &str) -> BigInt {
    decimal.parse().expect("decimal literal")
}

#[test]
fn recovers_secret_from_first_share_file() {
    let file = load_share_file("share-file-1.json");
    assert_eq!(file.keys.n, 4);
    assert_eq!(file.keys.k, 3);
    let secret = recover_from_file(&file, &field::default_prime()).unwrap();
    assert_eq!(secret, BigInt::from(3));
}

#[test]
fn recovers_secret_from_second_share_file() {
    let file = load_share_file("share-file-2.json");
    let secret = recover_from_file(&file, &field::default_prime()).unwrap();
    assert_eq!(secret, BigInt::from(28735619723864u64));
}

#[test]
fn every_threshold_subset_agrees() {
    // All four shares of the first file lie on f(x) = x^2 + 3, so any
    // three of them reconstruct the same secret.
    let file = load_share_file("share-file-1.json");
    let shares = file.decode_shares().unwrap();
    assert_eq!(shares.len(), 4);
    for skip in 0..shares.len() {
        let subset: Vec<Share> = shares
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, s)| s.clone())
            .collect();
        let secret = recover_secret(&subset, 3, &field::default_prime()).unwrap();
        assert_eq!(secret, BigInt::from(3), "subset skipping {} disagrees", skip);
    }
}

#[test]
fn decoded_values_match_their_bases() {
    let file = load_share_file("share-file-2.json");
    let shares = file.decode_shares().unwrap();
    let expected: [(u64, u64); 9] = [
        (1, 28735619723837),
        (2, 28735619723466),
        (3, 28735619721359),
        (4, 28735619714108),
        (5, 28735619695329),
        (6, 28735619654702),
        (7, 28859585857715),
        (8, 28735619441184),
        (9, 28735619219333),
    ];
    assert_eq!(shares.len(), expected.len());
    for (share, (x, y)) in shares.iter().zip(expected) {
        assert_eq!(share.index, x);
        assert_eq!(share.value, BigInt::from(y));
    }
}

#[test]
fn recovers_a_256_bit_secret() {
    // Shares of a quadratic with ~256-bit coefficients over the default prime
    let shares = vec![
        Share::new(
            2,
            big("52669151675166418197793613096527355889223435701905192962798447957057462802411"),
        ),
        Share::new(
            5,
            big("77690303256490087160292827347048231420468295798556274333031935871159265749528"),
        ),
        Share::new(
            7,
            big("37687663539821077981946643806688570243251013102065650901189641921798842621600"),
        ),
    ];
    let secret = recover_secret(&shares, 3, &field::default_prime()).unwrap();
    assert_eq!(
        secret,
        big("95097065754048712493019462230827768523616324208853691743435754128633565197368")
    );
}
