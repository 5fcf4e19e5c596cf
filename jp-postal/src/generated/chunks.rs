// Generated file - do not edit
// 10 chunks, 23 entries

pub(crate) static CHUNKS: &[(&str, &str)] = &[
    ("060", "vZFdTsJAEMffPQWPmqxJS9TglfQS3V1iRBo/UCGAVDEgCYgGFFtxux5muhWe5grubv2KyqO2zXSmM/3Pb2a3ibPhmMu8czniuK7jEuXX0kk4p8cEeBM4BzYA1gFeAnZF0rOhevRVxJJoqDo3yp8SYBNTxVvAh8BC4BR4V9cC61t7S5KnbhKVgQ7S/fFMlID6QPtAi+riXh3uEqOue/AysJH1J9ZeA9+zjQ+BXWqHONm9tJ1hr7l/jK06vbnXSFsjYr/1rZa2+qkYPBZaIPcLUv5fkGbdZxS7KI4wDowV9SSiL80bFKWfqHqr4bK76m5auZ4R4u0VQ23JtwxxYb1QWED+C6ZOJlEpbbU1B0FRzZp//qOmlKDcR8kwfsB4jLKIMsD4DiVFWdXOm2om+QGxkV90oosgvA+IyvsGjt6K7S7vgNeAD9TpTjItg+elF30lDhLReOlIgvGTQTSg5yibNmyh9G1Yx1hkrNYJcmYUkwtMHIc2DMxwJn3ybaBX"),
    ("064", "HY4xCsJAEEWvkgNMMQtB8EyeIjOVsJUWERIbiRbGVSxCVq/zMwvews3y4f/iveLviDc1b2u3blURO8eOzLdpmn/NkaAdVCEjZIDuITdKfbCPtyhLDDY8zX8JMq2WnqEBMkMb6DW7kHvpF6U2g/cST9m9FP0AeRQ+EufkA38="),
    ("066", "pU9BCsJADLz7ij5gD9ui/VQ/YTcIFbpQ20IFD15ED6UoqLTU/U3YFU/7BbNb9QOSMCGTCZMkjMcx5zx0NQgYD6NoznTemHv/SiuGsEMAFC2KA8IaxZFpCaa76kHQMEXIUDxQ9MwMK3O5PeuRUYewRzH6+cntcAqymCUfu8XfdlrWusytyqza+pRWlbhMCa1qrNp4hrDwZGVV7fEno7bw6GRfZtqV9EI3XY5wdoe7eAM="),
    ("100", "rZBLTsMwEIb3nKJLkLxIhEBwJXqJ2FNQ+uZRgQpqKVAoakuh5RVSxxxm4pSs5grYLgKxYIctjf+Z+T3+5CLzPbfsWSgwf933fJZ1pmk8ziFhCCGKGxR3CAMrIGS6Dun8atF60LXY9DnCLUKA4p6l8+s0qiIfZY3ZhywjryEfIi/p3pPeDxmKPooRQhXF1OlnF8cIFStgH8WlEcxb7pXiF9vGv7BFEfKJ3tslGWbjC6MRjhBGKA7zdh95k2TZ3OjaEjTcOL6KUEIxsfnSCzPXU2bgmoP0DeaOxdva3Pb/wPzF9I3BSB6kEV+cTYwgWTfxx2m/Bh4RTsyj6Xsnb8cYBFlvqGUzlaeLvmKkOKljUgGpLiVzUh1SNVLnpNqkGpS8mUqBkhdXNQ5JyatLjZ7ZVLVYXgl0PGDeJw=="),
    ("102", "y9YxNDAyMDA3AtEKCjqGxoYGhjrP5m58smvNy+a9Oo+bOx43LXvctPZx83IQo7lD52lv85Pdi59P2fC0ZxdQvvFx84rHzQ2Pm9brvFy8Hij8bGW3zuOmJSAEFG6e8Lhpu44BEBrqGAAA"),
    ("150", "pVFdTgIxEH73FBygD6xolCvJJdiWB2CBgCjEkEVjRIzgyoLIBrblMLM/7NNcwbYsoCbGB9qk/Tr9Zr6v0wIxzrNqqD2TIUbOMHIkst1gOU4YJ8DKQJ+BvgEbKsDKJPKszWQR1pYE6AJYB9gT0HcSrAaBZ4E5ihrTjV8BswbmK5il8OEjbJYlV7JGwCygrsZzvY6BVRVgTaCPEpDsdp4UUmPG0cbiQT90nLBSl2EP2AzoRCf0gb5oMeOb3OnRctvwIfZb4ix3tERituNGKbSpzKnonKl+16fs8F7uSslc/t3AQ23VoHqXoH8deGbccyRAv45+K+Wov5LlWRfYKLoRSdEkyH0UNRR9FDfIVyhsfbxHcYeigXyGfC3XXTN2bi7y+X/dpClSfuemtTeEfju9T9g8EOvQLUKxGA/NqOfFjvvTlrhVPoSljzbyBYoOci+jSIrXQVFVd3yvaXwB"),
    ("530", "y9YxNTYAAkMQraCgY2RuaGSu83TJ8pczVj3dNUfncdMqMNr6uGn14+apMJkdTU97pj/t2YUq37T9cdPax037Hzet13m2qPX5lA1A+WWPmxc+bm7QMQBCQx0DAA=="),
    ("540", "dU5LCsJADN17Cg+QRS3+zqSXsDM7qYKIqGgtglpoURGpDrUzl4njZ5Ur2Km6UDR5vMDLCy9NqJStrGwzi0WwayW7DnoR3EehTqaALMwRI4uQD94bwc5irRcb7SafFnZE7iBfIlvlYsbb95Hf/fIK5EFmAevZhYZ5ol4tWX+e+RGu3eElngKl/bNwrpMNpT1KOxm/zCaK75EPkUf3dus2d4FknONE8mBYeaRcUj6pMckjqZlRZEJyDxdvB9YD"),
    ("542", "y9YxNTEyMDA3A9EKCjpG5oZGFjpPlyx/OWPV011zdB43rQKjrY+bVj9ungqT2dH0ZMfap0vWPe3Zhaqkafvj5sbHzUsfNy0DCwLJ9TovZy9+tnmRzuPmrsfNmx83T9AxAEJDHQMA"),
    ("900", "y9axNAABMxCtoKBjYm5kYKjzbNO05ztans/p0XnctOpx09rHzV2Pm9c/btr4uHmzzsumxS+WtT/d0aQDFu5/3LRd53Fj1+OmpsdNvY8b9z1uXAjW1rzocTNQ57zHzY06BkBoqGMAAA=="),
];
