use sss::{combine, reshare, split};

fn main() {
    let secret = b"example secret shared five ways";
    let shares = split(secret, 5, 3).expect("valid configuration");

    for share in &shares {
        println!("share {:>3}: {:02x?}", share.x().unwrap_or_default(), share.values());
    }

    let recovered =
        combine(&shares[2..]).expect("three shares recover the secret");
    assert_eq!(recovered, secret);
    println!("recovered: {}", String::from_utf8_lossy(&recovered));

    let replacement =
        reshare(&shares[..3], 5).expect("three shares rebuild the fifth");
    assert_eq!(replacement, shares[4]);
    println!("rebuilt share 5 from shares 1-3");
}
