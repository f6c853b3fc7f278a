//! Share codes for replaying a round.
//!
//! Two forms decode to a round seed:
//! - `TP-<WORD><NN>`, e.g. `TP-ZAPATILLA07`. The word index and the two-digit
//!   number are packed into the low 16 bits; the upper bits come from a
//!   domain-separated FNV hash of that packing. Only 6400 seeds have this form.
//! - `TP-<WORD><NN>-<TAIL>` for any other seed, read mixed-radix as
//!   `word + 64 * (nn + 100 * tail)` with the tail in Crockford base32.

const CODE_PREFIX: &str = "TP";
const TAIL_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const WORD_RADIX: u64 = WORD_LIST.len() as u64;
const SHORT_SPACE: u64 = WORD_RADIX * 100;

pub const WORD_LIST: [&str; 64] = [
    "CORREDOR", "MONTANA", "MURO", "META", "DORSAL", "GEL", "BASTON", "FRONTAL", "CHIP", "PACER",
    "CUESTA", "BAJADA", "RIO", "PIEDRA", "BARRO", "NIEVE", "SENDERO", "ASFALTO", "PUENTE", "CIMA",
    "VALLE", "BOSQUE", "ZAPATILLA", "CALCETIN", "GORRA", "MOCHILA", "AGUA", "SAL", "PLATANO",
    "RELOJ", "PULSO", "RITMO", "TEMPO", "SPRINT", "FONDO", "TIRADA", "SERIE", "RODAJE", "MARCA",
    "PODIO", "MEDALLA", "CRONO", "SALIDA", "ULTRA", "MARATON", "MILLA", "VUELTA", "PISTA",
    "TRAIL", "ROAD", "AMPOLLA", "VASELINA", "TALUD", "COLLADO", "REFUGIO", "ARROYO", "NIEBLA",
    "VIENTO", "SOMBRA", "SOL", "LUNA", "ALBA", "OCASO", "LIEBRE",
];

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    bytes.iter().fold(FNV_OFFSET, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME)
    })
}

fn sanitize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[inline]
const fn pack(word_index: u16, nn: u8) -> u16 {
    (word_index & 0x01FF) | ((nn as u16 & 0x7F) << 9)
}

#[inline]
const fn unpack(packed: u16) -> (u16, u8) {
    (packed & 0x01FF, ((packed >> 9) & 0x7F) as u8)
}

fn compose_seed(word_index: u16, nn: u8) -> u64 {
    let packed = pack(word_index, nn);
    let [lo, hi] = packed.to_le_bytes();
    let buf = [b'T', b'E', b'M', b'P', b'O', b'-', lo, hi, 0x5A];
    (fnv1a64(&buf) & 0xFFFF_FFFF_FFFF_0000) | u64::from(packed)
}

/// Word index and number if `seed` is one of the short-code seeds.
fn short_parts(seed: u64) -> Option<(u16, u8)> {
    let (wi, nn) = unpack((seed & 0xFFFF) as u16);
    (u64::from(wi) < WORD_RADIX && nn < 100 && compose_seed(wi, nn) == seed).then_some((wi, nn))
}

fn encode_tail(mut tail: u64) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(TAIL_ALPHABET[(tail % 32) as usize]);
        tail /= 32;
        if tail == 0 {
            break;
        }
    }
    digits.iter().rev().map(|b| char::from(*b)).collect()
}

fn decode_tail(tail: &str) -> Option<u64> {
    if tail.is_empty() {
        return None;
    }
    tail.chars().try_fold(0_u64, |acc, c| {
        let c = match c.to_ascii_uppercase() {
            'O' => '0',
            'I' | 'L' => '1',
            other => other,
        };
        let digit = TAIL_ALPHABET.iter().position(|b| char::from(*b) == c)?;
        acc.checked_mul(32)?.checked_add(digit as u64)
    })
}

/// Render the share code for a round seed.
#[must_use]
pub fn encode_friendly(seed: u64) -> String {
    if let Some((wi, nn)) = short_parts(seed) {
        return format!("{CODE_PREFIX}-{}{nn:02}", WORD_LIST[usize::from(wi)]);
    }
    let word = WORD_LIST[(seed % WORD_RADIX) as usize];
    let nn = (seed / WORD_RADIX) % 100;
    let tail = encode_tail(seed / SHORT_SPACE);
    format!("{CODE_PREFIX}-{word}{nn:02}-{tail}")
}

/// Parse a share code back into its round seed. Case and stray punctuation in
/// the word are ignored.
#[must_use]
pub fn decode_to_seed(code: &str) -> Option<u64> {
    let (prefix, rest) = code.trim().split_once('-')?;
    if !prefix.eq_ignore_ascii_case(CODE_PREFIX) {
        return None;
    }
    let (head, tail) = match rest.split_once('-') {
        Some((head, tail)) => (head, Some(tail)),
        None => (rest, None),
    };
    if head.len() < 3 || !head.is_char_boundary(head.len() - 2) {
        return None;
    }
    let (word_part, nn_part) = head.split_at(head.len() - 2);
    if !nn_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let nn: u8 = nn_part.parse().ok()?;
    let word = sanitize_word(word_part);
    let idx = WORD_LIST.iter().position(|w| *w == word)?;

    match tail {
        None => Some(compose_seed(u16::try_from(idx).ok()?, nn)),
        Some(tail) => decode_tail(tail)?
            .checked_mul(SHORT_SPACE)?
            .checked_add(u64::from(nn) * WORD_RADIX + idx as u64),
    }
}

/// Turn raw entropy into one of the short-code round seeds.
#[must_use]
pub fn round_seed_from_entropy(entropy: u64) -> u64 {
    let wi = u16::try_from(entropy % WORD_RADIX).unwrap_or(0);
    let nn = ((entropy >> 17) % 100) as u8;
    compose_seed(wi, nn)
}

#[must_use]
pub fn generate_code_from_entropy(entropy: u64) -> String {
    encode_friendly(round_seed_from_entropy(entropy))
}
