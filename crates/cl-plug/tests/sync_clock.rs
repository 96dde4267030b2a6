//! Integration tests: sync clock pulses observed at the emulation sink.

use cl_plug::{
    EmulationSource, Instrument, MidiMessage, SyncMode, TransportInfo, CLOCK_BYTE, ROW_SYNC_BYTE,
};

/// Source with unlimited audio that records every MIDI send.
struct BottomlessSource {
    active: bool,
    bytes: Vec<u8>,
    raw: Vec<Vec<u8>>,
}

impl BottomlessSource {
    fn new() -> Self {
        Self {
            active: true,
            bytes: Vec::new(),
            raw: Vec::new(),
        }
    }
}

impl EmulationSource for BottomlessSource {
    fn is_active(&self) -> bool {
        self.active
    }

    fn advance(&mut self) {}

    fn audio_available(&self) -> usize {
        usize::MAX
    }

    fn audio_read(&mut self, dest: &mut [f32]) -> usize {
        dest.fill(0.0);
        dest.len()
    }

    fn send_midi_byte(&mut self, _channel: u8, byte: u8) {
        self.bytes.push(byte);
    }

    fn send_midi_bytes(&mut self, _channel: u8, bytes: &[u8]) {
        self.raw.push(bytes.to_vec());
    }
}

fn instrument() -> Instrument<BottomlessSource> {
    Instrument::new(BottomlessSource::new(), 64)
}

fn note_on(note: u8) -> MidiMessage {
    MidiMessage::note_on(0, note, 100)
}

/// Run `blocks` blocks with the transport sweeping (0, end] evenly.
fn sweep(instrument: &mut Instrument<BottomlessSource>, end: f64, blocks: usize) {
    let mut left = [0.0f32; 16];
    let mut right = [0.0f32; 16];
    for k in 1..=blocks {
        let ppq = end * k as f64 / blocks as f64;
        instrument.process_block(&TransportInfo::rolling(ppq), &mut left, &mut right);
    }
}

fn pulse_count(instrument: &Instrument<BottomlessSource>, byte: u8) -> usize {
    instrument
        .source()
        .bytes
        .iter()
        .filter(|&&b| b == byte)
        .count()
}

#[test]
fn slave_pulse_total_matches_position() {
    let mut inst = instrument();
    inst.set_sync_mode(SyncMode::Slave);

    // 2 quarter notes at 24 PPQN: 48 boundary crossings.
    sweep(&mut inst, 2.0, 400);
    assert_eq!(pulse_count(&inst, CLOCK_BYTE), 48);
}

#[test]
fn tracker_pulse_totals_follow_each_divisor() {
    for (divisor_note, expected) in [(26, 96), (27, 48), (28, 24), (29, 12)] {
        let mut inst = instrument();
        inst.set_sync_mode(SyncMode::SlaveTracker);
        inst.process_midi(note_on(24)); // play
        inst.process_midi(note_on(divisor_note));

        // 4 quarter notes: 4 * 24 / divisor pulses.
        sweep(&mut inst, 4.0, 800);
        assert_eq!(
            pulse_count(&inst, CLOCK_BYTE),
            expected,
            "divisor note {}",
            divisor_note
        );
    }
}

#[test]
fn backward_jump_emits_exactly_one_pulse() {
    let mut inst = instrument();
    inst.set_sync_mode(SyncMode::Slave);
    sweep(&mut inst, 4.0, 100);

    let before = pulse_count(&inst, CLOCK_BYTE);
    let mut left = [0.0f32; 16];
    let mut right = [0.0f32; 16];
    inst.process_block(&TransportInfo::rolling(1.0), &mut left, &mut right);
    assert_eq!(pulse_count(&inst, CLOCK_BYTE), before + 1);

    // A small forward step from the new position crosses no boundary.
    inst.process_block(&TransportInfo::rolling(1.001), &mut left, &mut right);
    assert_eq!(pulse_count(&inst, CLOCK_BYTE), before + 1);
}

#[test]
fn stopped_transport_emits_no_pulses() {
    let mut inst = instrument();
    inst.set_sync_mode(SyncMode::Slave);

    let mut left = [0.0f32; 16];
    let mut right = [0.0f32; 16];
    for k in 1..100 {
        let ppq = k as f64 * 0.05;
        inst.process_block(&TransportInfo::stopped_at(ppq), &mut left, &mut right);
    }
    assert_eq!(pulse_count(&inst, CLOCK_BYTE), 0);
}

#[test]
fn tracker_mode_is_gated_by_play_notes() {
    let mut inst = instrument();
    inst.set_sync_mode(SyncMode::SlaveTracker);

    // Not playing: transport motion produces nothing.
    sweep(&mut inst, 2.0, 100);
    assert_eq!(pulse_count(&inst, CLOCK_BYTE), 0);

    inst.process_midi(note_on(24));
    sweep(&mut inst, 4.0, 100);
    assert!(pulse_count(&inst, CLOCK_BYTE) > 0);

    let after_play = pulse_count(&inst, CLOCK_BYTE);
    inst.process_midi(note_on(25));
    sweep(&mut inst, 8.0, 100);
    assert_eq!(pulse_count(&inst, CLOCK_BYTE), after_play);
}

#[test]
fn plain_slave_ignores_the_play_flag() {
    let mut inst = instrument();
    inst.set_sync_mode(SyncMode::Slave);
    // No play note was ever sent; pulses flow regardless.
    sweep(&mut inst, 1.0, 100);
    assert_eq!(pulse_count(&inst, CLOCK_BYTE), 24);
}

#[test]
fn divisor_two_halves_pulse_density() {
    let mut inst = instrument();
    inst.set_sync_mode(SyncMode::SlaveTracker);
    inst.process_midi(note_on(24));
    inst.process_midi(note_on(27)); // divisor 2

    sweep(&mut inst, 2.0, 400);
    assert_eq!(pulse_count(&inst, CLOCK_BYTE), 24);
}

#[test]
fn row_map_emits_row_sync_bytes_while_playing() {
    let mut inst = instrument();

    // The play flag is only settable through the tracker protocol; a mode
    // switch carries it over.
    inst.set_sync_mode(SyncMode::SlaveTracker);
    inst.process_midi(note_on(24));
    inst.set_sync_mode(SyncMode::RowMap);

    sweep(&mut inst, 1.0, 100);
    assert_eq!(pulse_count(&inst, ROW_SYNC_BYTE), 24);
    assert_eq!(pulse_count(&inst, CLOCK_BYTE), 0);
}

#[test]
fn row_map_stays_silent_without_the_play_flag() {
    let mut inst = instrument();
    inst.set_sync_mode(SyncMode::RowMap);
    sweep(&mut inst, 2.0, 100);
    assert_eq!(pulse_count(&inst, ROW_SYNC_BYTE), 0);
}

#[test]
fn row_map_forwards_note_numbers_to_the_sink() {
    let mut inst = instrument();
    inst.set_sync_mode(SyncMode::RowMap);

    inst.process_midi(note_on(42));
    assert_eq!(inst.source().bytes, vec![42]);
}

#[test]
fn off_mode_forwards_raw_messages() {
    let mut inst = instrument();

    inst.process_midi(MidiMessage::note_on(2, 60, 90));
    inst.process_midi(MidiMessage::new(0xB0, 7, 127));

    assert_eq!(
        inst.source().raw,
        vec![vec![0x92, 60, 90], vec![0xB0, 7, 127]]
    );
    assert!(inst.source().bytes.is_empty());
}

#[test]
fn off_mode_emits_no_clock() {
    let mut inst = instrument();
    sweep(&mut inst, 8.0, 100);
    assert!(inst.source().bytes.is_empty());
}
