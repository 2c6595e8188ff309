use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ranwire::gtpu::{GtpuCodec, GtpuHeader, GTPU_BASE_HEADER_LEN};
use ranwire::CursorMut;

fn write_then_read(codec: &GtpuCodec, buf: &mut [u8], teid: u32) -> u32 {
    let mut pkt = CursorMut::with_headroom(buf, GTPU_BASE_HEADER_LEN);
    let header = GtpuHeader::g_pdu(teid, 1400);
    codec.write_header(&header, &mut pkt).unwrap();
    codec.read_header(&mut pkt).unwrap().teid
}

pub fn b(c: &mut Criterion) {
    let codec = GtpuCodec::default();
    c.bench_function("gtpu_write_read", |b| {
        let mut buf = [0; GTPU_BASE_HEADER_LEN + 1400];
        b.iter(|| write_then_read(&codec, black_box(&mut buf[..]), black_box(0x12345678)))
    });

    c.bench_function("gtpu_peek", |b| {
        let pkt = [0x32, 0xff, 0x05, 0x7c, 0x12, 0x34, 0x56, 0x78, 0x00, 0x01, 0x00, 0x00];
        b.iter(|| codec.peek_header(black_box(&pkt[..])).unwrap())
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
