/// Render bytes as space separated lower case hex pairs, followed by the bit count on its own line.
pub fn hexdump(data: &[u8]) -> String {
    let mut out: String = data.iter().map(|b| format!("{:02x} ", b)).collect();
    out.push_str(&format!("\n{} bits\n", data.len() * 8));
    out
}
