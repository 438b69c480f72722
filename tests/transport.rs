mod tests {
    use disco_light::{LinkBuffer, Transport};

    #[test]
    fn test_link_buffer_fifo() {
        let link = LinkBuffer::<8>::new();
        let mut transport = link.transport();
        assert!(!transport.bytes_waiting());
        assert_eq!(transport.read_byte(), Ok(None));

        assert_eq!(link.push(b"abc"), 3);
        assert!(transport.bytes_waiting());
        assert_eq!(transport.read_byte(), Ok(Some(b'a')));
        assert_eq!(transport.read_byte(), Ok(Some(b'b')));
        assert_eq!(transport.read_byte(), Ok(Some(b'c')));
        assert!(!transport.bytes_waiting());
    }

    #[test]
    fn test_link_buffer_overflow_is_counted() {
        let link = LinkBuffer::<4>::new();
        assert_eq!(link.push(b"abcdef"), 4);
        assert_eq!(link.overflowed(), 2);
        assert_eq!(link.push(b"g"), 0);
        assert_eq!(link.overflowed(), 3);
    }

    #[test]
    fn test_advertising_until_connected() {
        let link = LinkBuffer::<4>::new();
        let mut transport = link.transport();
        assert!(!transport.is_connected());
        assert!(!link.is_advertising());

        transport.start_advertising().unwrap();
        transport.start_advertising().unwrap();
        assert!(link.is_advertising());

        link.set_connected(true);
        assert!(transport.is_connected());
        assert!(!link.is_advertising());

        link.set_connected(false);
        assert!(!transport.is_connected());
    }
}
