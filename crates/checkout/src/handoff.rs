//! Handing the finished message to the outside world.
//!
//! The handoff is fire-and-forget: there is no confirmation channel, so it
//! cannot fail from the wizard's point of view.

use crate::message::OrderMessage;

/// Receives the rendered order message (e.g. opens the WhatsApp deep link).
pub trait MessageHandoff {
    fn hand_off(&mut self, message: &OrderMessage);
}

impl<H: MessageHandoff + ?Sized> MessageHandoff for &mut H {
    fn hand_off(&mut self, message: &OrderMessage) {
        (**self).hand_off(message)
    }
}

impl<H: MessageHandoff + ?Sized> MessageHandoff for Box<H> {
    fn hand_off(&mut self, message: &OrderMessage) {
        (**self).hand_off(message)
    }
}

/// Collects messages; used as an outbox.
impl MessageHandoff for Vec<OrderMessage> {
    fn hand_off(&mut self, message: &OrderMessage) {
        self.push(message.clone());
    }
}

/// Percent-encode `input` the way `encodeURIComponent` does.
///
/// Unreserved: ASCII letters, digits and `- _ . ! ~ * ' ( )`. Every other
/// UTF-8 byte becomes `%XX` (uppercase hex).
pub fn percent_encode(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len() * 3);
    for &byte in input.as_bytes() {
        let unreserved = byte.is_ascii_alphanumeric()
            || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')');
        if unreserved {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(percent_encode("abcXYZ019-_.!~*'()"), "abcXYZ019-_.!~*'()");
    }

    #[test]
    fn reserved_and_whitespace_are_escaped() {
        assert_eq!(percent_encode("a b\n$1&x=y"), "a%20b%0A%241%26x%3Dy");
    }

    #[test]
    fn multibyte_characters_encode_each_byte() {
        assert_eq!(percent_encode("ñ"), "%C3%B1");
        assert_eq!(percent_encode("🍔"), "%F0%9F%8D%94");
    }

    fn send(mut handoff: impl MessageHandoff, message: &OrderMessage) {
        handoff.hand_off(message);
    }

    #[test]
    fn vec_outbox_collects_messages() {
        let mut outbox: Vec<OrderMessage> = Vec::new();
        let message = OrderMessage {
            destination: "1".to_string(),
            body: "hola".to_string(),
        };
        outbox.hand_off(&message);
        send(&mut outbox, &message);
        send(Box::new(&mut outbox), &message);
        assert_eq!(outbox.len(), 3);
    }
}
