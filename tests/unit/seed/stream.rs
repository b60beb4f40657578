use super::*;

#[test]
fn next_byte_cycles_over_data() {
    let mut s = ByteStream::new(vec![1u8, 2, 3]).unwrap();
    let got: Vec<u8> = (0..7).map(|_| s.next_byte()).collect();
    assert_eq!(got, vec![1, 2, 3, 1, 2, 3, 1]);
    assert_eq!(s.position(), 7);
}

#[test]
fn next_bounded_reduces_modulo() {
    let mut s = ByteStream::new(vec![255u8, 7, 10]).unwrap();
    assert_eq!(s.next_bounded(4), 3);
    assert_eq!(s.next_bounded(4), 3);
    assert_eq!(s.next_bounded(3), 1);
}

#[test]
fn non_positive_bound_yields_zero_without_consuming() {
    let mut s = ByteStream::new(vec![9u8]).unwrap();
    assert_eq!(s.next_bounded(0), 0);
    assert_eq!(s.next_bounded(-5), 0);
    assert_eq!(s.position(), 0);
    assert_eq!(s.next_bounded(10), 9);
    assert_eq!(s.position(), 1);
}

#[test]
fn empty_data_is_rejected() {
    assert!(ByteStream::new(Vec::<u8>::new()).is_err());
}

#[test]
fn digest_streams_replay_identically() {
    let digest = Digest::from_bytes(core::array::from_fn(|i| (i * 7) as u8));
    let mut a = ByteStream::from_digest(&digest);
    let mut b = ByteStream::from_digest(&digest);
    for n in 1..200 {
        assert_eq!(a.next_bounded(n), b.next_bounded(n));
    }
    assert_eq!(a.position(), b.position());
}

#[test]
fn digest_stream_wraps_after_32_bytes() {
    let digest = Digest::from_bytes(core::array::from_fn(|i| i as u8));
    let mut s = ByteStream::from_digest(&digest);
    for _ in 0..32 {
        s.next_byte();
    }
    assert_eq!(s.next_byte(), 0);
}
