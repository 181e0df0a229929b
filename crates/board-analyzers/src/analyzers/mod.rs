pub mod go;
pub mod guandan;
pub mod mahjong;
pub mod poker;
pub mod xiangqi;
