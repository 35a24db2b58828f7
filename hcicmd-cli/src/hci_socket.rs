use hcicmd::constants::HCI_EVENT_PKT;
use std::fs::File;
use std::io::{self, Read, Write};
use std::mem;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

const BTPROTO_HCI: libc::c_int = 1;
const SOL_HCI: libc::c_int = 0;
const HCI_FILTER: libc::c_int = 2;
const HCI_CHANNEL_RAW: u16 = 0;

#[repr(C)]
struct SockaddrHci {
    hci_family: libc::sa_family_t,
    hci_dev: u16,
    hci_channel: u16,
}

// Mirrors the kernel's `struct hci_ufilter`.
#[repr(C)]
struct HciFilter {
    type_mask: u32,
    event_mask: [u32; 2],
    opcode: u16,
}

/// A raw HCI socket bound to one local controller.
///
/// Reads and writes go straight to the socket descriptor, which is closed on
/// drop.
pub struct HciSocket {
    file: File,
}

impl HciSocket {
    /// Opens a raw HCI socket, lets every event packet through the socket
    /// filter, and binds it to `hci<device>`.
    pub fn open(device: u16) -> io::Result<Self> {
        // SAFETY: plain socket(2) call; the return value is checked below.
        let raw = unsafe {
            libc::socket(
                libc::AF_BLUETOOTH,
                libc::SOCK_RAW | libc::SOCK_CLOEXEC,
                BTPROTO_HCI,
            )
        };

        if raw < 0 {
            return Err(io::Error::last_os_error());
        }

        // SAFETY: `raw` is a freshly created descriptor that nothing else owns.
        let fd = unsafe { OwnedFd::from_raw_fd(raw) };

        set_event_filter(&fd)?;
        bind(&fd, device)?;

        Ok(Self {
            file: File::from(fd),
        })
    }
}

impl Read for HciSocket {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for HciSocket {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn set_event_filter(fd: &OwnedFd) -> io::Result<()> {
    let filter = HciFilter {
        type_mask: 1 << HCI_EVENT_PKT,
        event_mask: [u32::MAX; 2],
        opcode: 0,
    };

    // SAFETY: `filter` outlives the call and the length matches its type.
    let rc = unsafe {
        libc::setsockopt(
            fd.as_raw_fd(),
            SOL_HCI,
            HCI_FILTER,
            (&filter as *const HciFilter).cast(),
            mem::size_of::<HciFilter>() as libc::socklen_t,
        )
    };

    if rc < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

fn bind(fd: &OwnedFd, device: u16) -> io::Result<()> {
    let addr = SockaddrHci {
        hci_family: libc::AF_BLUETOOTH as libc::sa_family_t,
        hci_dev: device,
        hci_channel: HCI_CHANNEL_RAW,
    };

    // SAFETY: `addr` outlives the call and the length matches its type.
    let rc = unsafe {
        libc::bind(
            fd.as_raw_fd(),
            (&addr as *const SockaddrHci).cast(),
            mem::size_of::<SockaddrHci>() as libc::socklen_t,
        )
    };

    if rc < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}
